// src/debug/ui.rs
use crate::debug::visualization::gizmos::ViewerSettings;
use crate::viewer::{
    resources::{InteractiveOffset, PlacementScene, SearchPlayback},
    state::ViewerMode,
};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Slider, Window},
};

pub fn placement_control_ui_system(
    mut contexts: EguiContexts,
    scene: Res<PlacementScene>,
    mut playback: ResMut<SearchPlayback>,
    mut settings: ResMut<ViewerSettings>,
    offset: Res<InteractiveOffset>,
    current_mode: Res<State<ViewerMode>>,
    mut next_mode: ResMut<NextState<ViewerMode>>,
) {
    let mode = *current_mode.get();

    Window::new("Platzierungssteuerung")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(format!("Modus: {}", mode.label()));

            match mode {
                ViewerMode::Search => search_section(ui, &scene, &mut playback),
                ViewerMode::Interactive => match offset.0 {
                    Some(click) => {
                        ui.label(format!("Gitter bei ({:.2}, {:.2})", click.x, click.y));
                    }
                    None => {
                        ui.label("Linksklick platziert das Gitter.");
                    }
                },
            }

            ui.separator();
            ui.collapsing("Darstellung", |ui| {
                ui.checkbox(&mut settings.show_cells, "Zellen");
                ui.checkbox(&mut settings.show_waypoints, "Wegpunkte");
                ui.checkbox(&mut settings.show_trajectory, "Trajektorie");
                ui.add(
                    Slider::new(&mut settings.waypoint_scale, 0.02..=0.5).text("Punktgröße"),
                );
            });

            ui.separator();
            if ui
                .button(format!("Wechseln zu: {}", mode.toggled().label()))
                .clicked()
            {
                next_mode.set(mode.toggled());
                info!("Viewer mode change requested: {:?}", mode.toggled());
            }
        });
}

fn search_section(ui: &mut egui::Ui, scene: &PlacementScene, playback: &mut SearchPlayback) {
    let state = playback.search().state();
    ui.label(format!("Phase: {:?}", state.phase));
    ui.label(format!("Richtungswechsel: {}", state.direction_changes));
    ui.label(format!("Max. Wegpunkte im Zaun: {}", state.max_inside));

    match playback.current {
        Some(step) => {
            ui.label(format!("Schritt: {}", step.index));
            ui.label(format!("Wegpunkte im Zaun: {}", step.containment.count_inside));
            ui.label(format!("Pose: {}", step.pose));
        }
        None => {
            ui.label("Noch kein Schritt ausgeführt.");
        }
    }

    if let Some(outcome) = &playback.outcome {
        ui.separator();
        ui.label(format!("Beendet: {:?}", outcome.termination));
        match &outcome.optimal_placement {
            Some(placement) => ui.label(format!(
                "Beste Lage: Schritt {}, {}",
                placement.step_index, placement.pose
            )),
            None => ui.label("Keine Lage gefunden."),
        };
    }

    ui.horizontal(|ui| {
        if !playback.is_finished()
            && ui
                .button(if playback.paused { "▶ Play" } else { "⏸ Pause" })
                .clicked()
        {
            playback.paused = !playback.paused;
        }
        if ui.button("↺ Neustart").clicked() {
            match SearchPlayback::new(scene) {
                Ok(fresh) => {
                    *playback = fresh;
                    info!("Search restarted.");
                }
                Err(e) => warn!("Search could not be restarted: {}", e),
            }
        }
    });
}
