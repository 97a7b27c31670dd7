// src/viewer/systems.rs
use super::resources::{InteractiveOffset, PlacementScene, SearchPlayback};
use crate::math::types::*;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

/// Kamera-Zoom, sodass ein Gitter mit K = 10 ins Fenster passt
const CAMERA_SCALE: f32 = 0.06;

pub fn setup_camera(mut commands: Commands) {
    let mut camera = Camera2dBundle::default();
    camera.projection.scale = CAMERA_SCALE;
    commands.spawn(camera);
}

/// Zieht pro fälligem Timer-Tick einen Suchschritt
pub fn advance_search_system(time: Res<Time>, mut playback: ResMut<SearchPlayback>) {
    let due = playback.due_steps(time.delta());
    if due == 0 {
        return;
    }

    playback.advance(due);
}

/// Setzt die Suche beim Betreten des Suchmodus zurück
pub fn restart_search_system(scene: Res<PlacementScene>, mut playback: ResMut<SearchPlayback>) {
    match SearchPlayback::new(&scene) {
        Ok(fresh) => *playback = fresh,
        Err(e) => warn!("Search could not be restarted: {}", e),
    }
}

pub fn reset_offset_system(mut offset: ResMut<InteractiveOffset>) {
    *offset = InteractiveOffset::default();
}

/// Linksklick verschiebt das Gitter absolut an die Klickposition
pub fn handle_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    mut offset: ResMut<InteractiveOffset>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    // Klicks auf das Steuerfenster nicht als Platzierung werten
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let click: Point2D = world;
    offset.0 = Some(click);
    info!("Lattice placed at ({:.2}, {:.2})", click.x, click.y);
}
