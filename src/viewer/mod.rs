// src/viewer/mod.rs
//! Bevy-Oberfläche: animierte Suche und interaktive Platzierung.

pub mod resources;
pub mod state;
pub mod systems;

use crate::debug::{
    ui::placement_control_ui_system,
    visualization::gizmos::{
        ViewerSettings, draw_fence_system, draw_interactive_lattice_system,
        draw_search_system,
    },
};
use bevy::prelude::*;
use resources::InteractiveOffset;
use state::ViewerMode;
use systems::*;

/// Erwartet `PlacementScene` und `SearchPlayback` als Ressourcen
pub struct ViewerPlugin {
    pub initial_mode: ViewerMode,
}

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_state(self.initial_mode)
            .init_resource::<InteractiveOffset>()
            .init_resource::<ViewerSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(ViewerMode::Search), restart_search_system)
            .add_systems(OnEnter(ViewerMode::Interactive), reset_offset_system)
            .add_systems(
                Update,
                (
                    placement_control_ui_system,
                    advance_search_system.run_if(in_state(ViewerMode::Search)),
                    handle_click_system.run_if(in_state(ViewerMode::Interactive)),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    draw_fence_system,
                    draw_search_system.run_if(in_state(ViewerMode::Search)),
                    draw_interactive_lattice_system.run_if(in_state(ViewerMode::Interactive)),
                ),
            );
    }
}
