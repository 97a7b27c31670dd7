// src/debug/visualization/gizmos.rs
use crate::math::{
    geometry::{lattice::cell_vertices, region::Region},
    types::*,
};
use crate::viewer::resources::{InteractiveOffset, PlacementScene, SearchPlayback};
use bevy::prelude::*;

const CELL_COLOR: Color = Color::BLACK;
const FENCE_COLOR: Color = Color::RED;
const ZONE_COLOR: Color = Color::ORANGE;
const INSIDE_COLOR: Color = Color::CYAN;
const OUTSIDE_COLOR: Color = Color::BLUE;
const TRAJECTORY_COLOR: Color = Color::GREEN;

/// Segmente für Kreise
const CIRCLE_SEGMENTS: usize = 64;

/// Schalter der Gizmo-Darstellung, im Steuerfenster änderbar
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub show_cells: bool,
    pub show_waypoints: bool,
    pub show_trajectory: bool,
    /// Radius der Wegpunkt-Markierung relativ zum Zellradius
    pub waypoint_scale: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            show_cells: true,
            show_waypoints: true,
            show_trajectory: true,
            waypoint_scale: 0.08,
        }
    }
}

fn draw_waypoints(
    gizmos: &mut Gizmos,
    scene: &PlacementScene,
    centers: &[Point2D],
    settings: &ViewerSettings,
) {
    let marker = scene.lattice.radius() * settings.waypoint_scale;
    for &center in centers {
        let color = if scene.fence.admits(center) {
            INSIDE_COLOR
        } else {
            OUTSIDE_COLOR
        };
        gizmos.circle_2d(center, marker, color);
    }
}

/// Zielgebiet und Sperrkreise
pub fn draw_fence_system(mut gizmos: Gizmos, scene: Res<PlacementScene>) {
    match &scene.fence.region {
        Region::Circle(circle) => {
            gizmos
                .circle_2d(circle.center(), circle.radius(), FENCE_COLOR)
                .segments(CIRCLE_SEGMENTS);
        }
        Region::Polygon(polygon) => {
            gizmos.linestrip_2d(polygon.boundary(), FENCE_COLOR);
        }
    }

    for zone in &scene.fence.exclusion_zones {
        gizmos
            .circle_2d(zone.circle().center(), zone.circle().radius(), ZONE_COLOR)
            .segments(CIRCLE_SEGMENTS);
    }
}

/// Aktueller Suchschritt; nach Abschluss die beste Lage mit Trajektorie
pub fn draw_search_system(
    mut gizmos: Gizmos,
    scene: Res<PlacementScene>,
    playback: Res<SearchPlayback>,
    settings: Res<ViewerSettings>,
) {
    let best = playback
        .outcome
        .as_ref()
        .and_then(|outcome| outcome.optimal_placement.as_ref());

    let pose = match (best, playback.current) {
        (Some(placement), _) => placement.pose,
        (None, Some(step)) => step.pose,
        (None, None) => return,
    };

    if settings.show_cells {
        for ring in scene.lattice.cells_for_pose(&pose, scene.gap_factor) {
            gizmos.linestrip_2d(ring, CELL_COLOR);
        }
    }

    let centers = scene.lattice.transformed(&pose);
    if settings.show_waypoints {
        draw_waypoints(&mut gizmos, &scene, &centers, &settings);
    }
    if settings.show_trajectory && best.is_some() {
        gizmos.linestrip_2d(centers, TRAJECTORY_COLOR);
    }
}

/// Gitter an der letzten Klickposition, ohne Auswertung
pub fn draw_interactive_lattice_system(
    mut gizmos: Gizmos,
    scene: Res<PlacementScene>,
    offset: Res<InteractiveOffset>,
    settings: Res<ViewerSettings>,
) {
    let offset = offset.0.unwrap_or(Point2D::ZERO);
    let radius = scene.gap_factor * scene.lattice.radius();
    let centers = scene.lattice.translated(offset);

    if settings.show_cells {
        for &center in &centers {
            gizmos.linestrip_2d(
                cell_vertices(center, radius, scene.lattice.cell_phase()),
                CELL_COLOR,
            );
        }
    }
    if settings.show_waypoints {
        draw_waypoints(&mut gizmos, &scene, &centers, &settings);
    }
}

