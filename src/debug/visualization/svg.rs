// src/debug/visualization/svg.rs
use crate::math::{
    error::MathResult,
    geometry::{lattice::Lattice, region::Fence},
    types::*,
};
use crate::placement::search::SearchOutcome;
use bevy::log::info;
use svg::Document;
use svg::node::element::{Circle, Group, Polygon, Polyline};

const SVG_PIXEL_SIZE: u32 = 800;
const MARGIN: f32 = 2.0;

fn points_attr(points: &[Point2D]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Baut das SVG-Dokument der besten Lage.
///
/// Ohne gefundene Lage gibt es nichts zu zeichnen: `MathError::NoPlacementFound`.
pub fn build_placement_document(
    lattice: &Lattice,
    fence: &Fence,
    outcome: &SearchOutcome,
    gap_factor: f32,
) -> MathResult<Document> {
    let placement = outcome.require_placement()?;

    let bounds = Bounds2D::from_points_iter(placement.centers.iter().copied())
        .unwrap_or_default()
        .union(&fence.bounds())
        .padded(lattice.radius() + MARGIN);
    // Mit scale(1,-1) zeigt die y-Achse nach oben
    let view_box = format!(
        "{:.3} {:.3} {:.3} {:.3}",
        bounds.min.x,
        -bounds.max.y,
        bounds.width(),
        bounds.height()
    );
    let stroke = (bounds.width() + bounds.height()) / 2.0 * 0.002;

    let mut cells = Group::new()
        .set("fill", "none")
        .set("stroke", "#000000")
        .set("stroke-width", stroke);
    for ring in lattice.cells_for_pose(&placement.pose, gap_factor) {
        cells = cells.add(Polyline::new().set("points", points_attr(&ring)));
    }

    let mut zones = Group::new()
        .set("fill", "rgba(255, 170, 0, 0.25)")
        .set("stroke", "#ffaa00")
        .set("stroke-width", stroke);
    for zone in &fence.exclusion_zones {
        zones = zones.add(
            Circle::new()
                .set("cx", zone.circle().center().x)
                .set("cy", zone.circle().center().y)
                .set("r", zone.circle().radius()),
        );
    }

    let region = Polygon::new()
        .set("points", points_attr(&fence.region.boundary()))
        .set("fill", "none")
        .set("stroke", "#ff0000")
        .set("stroke-width", stroke * 3.0);

    let trajectory = Polyline::new()
        .set("points", points_attr(outcome.trajectory().unwrap_or_default()))
        .set("fill", "none")
        .set("stroke", "#00aa00")
        .set("stroke-width", stroke);

    let point_radius = lattice.radius() * 0.08;
    let mut centers = Group::new();
    for &center in &placement.centers {
        let fill = if fence.admits(center) {
            "#00cccc"
        } else {
            "#0000cc"
        };
        centers = centers.add(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", point_radius)
                .set("fill", fill),
        );
    }

    let scene = Group::new()
        .set("transform", "scale(1,-1)")
        .add(cells)
        .add(zones)
        .add(region)
        .add(trajectory)
        .add(centers);

    Ok(Document::new()
        .set("width", SVG_PIXEL_SIZE)
        .set("height", SVG_PIXEL_SIZE)
        .set("viewBox", view_box)
        .add(scene))
}

/// Schreibt die beste Lage als SVG-Datei.
pub fn create_placement_svg(
    filename: &str,
    lattice: &Lattice,
    fence: &Fence,
    outcome: &SearchOutcome,
    gap_factor: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = build_placement_document(lattice, fence, outcome, gap_factor)?;
    svg::save(filename, &document)?;
    info!(
        "Placement SVG '{}' written ({} waypoints inside)",
        filename, outcome.max_inside
    );
    Ok(())
}
