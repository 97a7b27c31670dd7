// src/math/geometry/region/polygon.rs
use crate::math::{error::*, types::*};
use geo::{Area, Contains, Coord, LineString, Polygon as GeoPolygon};

/// Einfaches Polygon als Zielgebiet; der Ring ist implizit geschlossen.
///
/// Punkte genau auf dem Rand gelten als außerhalb.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRegion {
    vertices: Vec<Point2D>,
    shape: GeoPolygon<f32>,
}

impl PolygonRegion {
    /// Ein abschließender Vertex gleich dem ersten wird entfernt.
    pub fn new(mut vertices: Vec<Point2D>) -> MathResult<Self> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(MathError::InvalidRegion {
                reason: format!(
                    "polygon needs at least 3 vertices, got {}",
                    vertices.len()
                ),
            });
        }

        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(MathError::InvalidRegion {
                reason: "polygon vertices must be finite".to_string(),
            });
        }

        let exterior = LineString::from(
            vertices
                .iter()
                .map(|v| Coord { x: v.x, y: v.y })
                .collect::<Vec<_>>(),
        );
        let shape = GeoPolygon::new(exterior, vec![]);

        if shape.unsigned_area() <= f32::EPSILON {
            return Err(MathError::InvalidRegion {
                reason: "polygon is degenerate (zero area)".to_string(),
            });
        }

        Ok(Self { vertices, shape })
    }

    /// Vertices ohne wiederholten Schlusspunkt
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn contains_point(&self, point: Point2D) -> bool {
        self.shape.contains(&Coord {
            x: point.x,
            y: point.y,
        })
    }

    pub fn area(&self) -> f32 {
        self.shape.unsigned_area()
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.vertices.iter().copied()).unwrap_or_default()
    }

    /// Geschlossener Ring für die Darstellung
    pub fn boundary(&self) -> Vec<Point2D> {
        let mut ring = self.vertices.clone();
        ring.push(self.vertices[0]);
        ring
    }
}
