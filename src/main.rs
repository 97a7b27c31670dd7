// src/main.rs
use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// Eigene Module deklarieren
pub mod config;
pub mod debug;
pub mod math;
pub mod placement;
pub mod viewer;

use config::{ConfigLoadError, ScenarioConfig};
use debug::visualization::svg::create_placement_svg;
use placement::report::SearchReport;
use viewer::{
    ViewerPlugin,
    resources::{PlacementScene, SearchPlayback},
    state::ViewerMode,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Preset {
    /// Drachenförmiger Polygonzaun
    CustomFence,
    /// Kreiszaun mit zwei Sperrzonen
    CircularFence,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Suche ohne Fenster, Ergebnis als YAML auf stdout
    Report,
    /// Animierte Suche
    Search,
    /// Gitter per Mausklick platzieren
    Interactive,
}

/// Platziert ein Wabengitter so, dass möglichst viele Wegpunkte im Zaun liegen
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Szenario-Datei (YAML); überschreibt --preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Eingebautes Szenario
    #[arg(short, long, value_enum, default_value = "custom-fence")]
    preset: Preset,

    #[arg(short, long, value_enum, default_value = "report")]
    mode: Mode,

    /// Beste Lage zusätzlich als SVG schreiben (nur im Report-Modus)
    #[arg(long)]
    svg: Option<PathBuf>,
}

/// Ausgabeoptionen des Report-Modus
#[derive(Resource, Debug, Clone, Default)]
struct ReportOptions {
    svg: Option<PathBuf>,
}

fn load_scene(args: &Args) -> Result<PlacementScene, ConfigLoadError> {
    let config = match (&args.config, args.preset) {
        (Some(path), _) => ScenarioConfig::load(path)?,
        (None, Preset::CustomFence) => ScenarioConfig::custom_fence(),
        (None, Preset::CircularFence) => ScenarioConfig::circular_fence(),
    };
    Ok(PlacementScene::from(config.build()?))
}

fn main() -> Result<(), ConfigLoadError> {
    let args = Args::parse();
    let scene = load_scene(&args)?;

    match args.mode {
        Mode::Report => {
            App::new()
                .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_once()))
                .add_plugins(LogPlugin::default())
                .insert_resource(scene)
                .insert_resource(ReportOptions { svg: args.svg })
                .add_systems(Startup, run_report_system)
                .run();
        }
        Mode::Search | Mode::Interactive => {
            let initial_mode = if args.mode == Mode::Search {
                ViewerMode::Search
            } else {
                ViewerMode::Interactive
            };
            let playback = SearchPlayback::new(&scene)?;
            App::new()
                .add_plugins(DefaultPlugins)
                .add_plugins(EguiPlugin)
                .insert_resource(scene)
                .insert_resource(playback)
                .add_plugins(ViewerPlugin { initial_mode })
                .run();
        }
    }

    Ok(())
}

/// Führt die Suche vollständig aus und gibt den Bericht aus
fn run_report_system(scene: Res<PlacementScene>, options: Res<ReportOptions>) {
    let search = match scene.new_search() {
        Ok(search) => search,
        Err(e) => {
            error!("Search could not be started: {}", e);
            return;
        }
    };
    let outcome = search.run();
    let report = SearchReport::from_outcome(&outcome);
    info!("{}", report.summary());

    match report.to_yaml() {
        Ok(yaml) => println!("{}", yaml),
        Err(e) => error!("Report could not be serialized: {}", e),
    }

    if let Some(path) = &options.svg {
        let filename = path.to_string_lossy();
        if let Err(e) = create_placement_svg(
            &filename,
            &scene.lattice,
            &scene.fence,
            &outcome,
            scene.gap_factor,
        ) {
            error!("SVG '{}' not written: {}", filename, e);
        }
    }
}
