// src/placement/evaluator.rs
use crate::math::{
    geometry::region::{ExclusionZone, Fence, Region, is_excluded},
    types::*,
};

/// Ergebnis einer Zählung über alle Mittelpunkte
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Containment {
    pub count_inside: usize,
    /// Zuletzt gesehener gültiger Punkt des Durchlaufs (nicht der "beste")
    pub last_inside: Option<Point2D>,
}

/// Zählt die Mittelpunkte im Gebiet, die in keiner Sperrzone liegen.
pub fn evaluate(
    centers: &[Point2D],
    region: &Region,
    exclusion_zones: &[ExclusionZone],
) -> Containment {
    centers
        .iter()
        .filter(|&&p| region.contains_point(p) && !is_excluded(p, exclusion_zones))
        .fold(Containment::default(), |acc, &p| Containment {
            count_inside: acc.count_inside + 1,
            last_inside: Some(p),
        })
}

pub fn evaluate_fence(centers: &[Point2D], fence: &Fence) -> Containment {
    evaluate(centers, &fence.region, &fence.exclusion_zones)
}

/// Teilt die Wegpunkte in zugelassene und verworfene (Reihenfolge bleibt erhalten)
pub fn partition(centers: &[Point2D], fence: &Fence) -> (Vec<Point2D>, Vec<Point2D>) {
    centers.iter().partition(|&&p| fence.admits(p))
}
