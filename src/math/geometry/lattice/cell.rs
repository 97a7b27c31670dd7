// src/math/geometry/lattice/cell.rs
use crate::math::{types::*, utils::constants::TAU};

/// Anzahl Punkte eines geschlossenen Sechseck-Rings (erster Punkt wiederholt)
pub const CELL_RING_LEN: usize = 7;

/// Eckpunkte einer Sechseckzelle als geschlossener Ring.
///
/// Sieben gleichmäßig verteilte Winkel über [0, 2π], verschoben um
/// `phase_offset`. Der siebte Punkt ist eine exakte Kopie des ersten.
pub fn cell_vertices(center: Point2D, radius: f32, phase_offset: f32) -> [Point2D; CELL_RING_LEN] {
    let mut ring = [center; CELL_RING_LEN];
    for (k, vertex) in ring.iter_mut().enumerate().take(CELL_RING_LEN - 1) {
        let t = k as f32 * TAU / (CELL_RING_LEN - 1) as f32 + phase_offset;
        *vertex = center + radius * Point2D::new(t.cos(), t.sin());
    }
    ring[CELL_RING_LEN - 1] = ring[0];
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ring_is_closed() {
        let ring = cell_vertices(Point2D::new(3.0, -1.0), 2.0, 0.4);
        assert_eq!(ring.len(), 7);
        assert_eq!(ring[0], ring[6]);
    }

    #[test]
    fn test_vertices_on_circle() {
        let center = Point2D::new(-2.0, 5.0);
        for vertex in cell_vertices(center, 1.5, 1.0) {
            assert_abs_diff_eq!(vertex.distance(center), 1.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_phase_offset() {
        let ring = cell_vertices(Point2D::ZERO, 1.0, PI / 2.0);
        assert_abs_diff_eq!(ring[0].x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ring[0].y, 1.0, epsilon = 1e-6);

        let unshifted = cell_vertices(Point2D::ZERO, 1.0, 0.0);
        assert_abs_diff_eq!(unshifted[1].x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(unshifted[1].y, 3f32.sqrt() / 2.0, epsilon = 1e-6);
    }
}
