// src/math/geometry/region/region.rs
use super::{circle::Circle, polygon::PolygonRegion};
use crate::math::{error::*, types::*};
use std::fmt;

/// Anzahl Stützpunkte für die Darstellung eines Kreiszauns
pub const CIRCLE_BOUNDARY_SAMPLES: usize = 100;

/// Erlaubtes Zielgebiet für Wegpunkte
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Polygon(PolygonRegion),
    Circle(Circle),
}

impl Region {
    pub fn polygon(vertices: Vec<Point2D>) -> MathResult<Self> {
        PolygonRegion::new(vertices).map(Region::Polygon)
    }

    pub fn circle(center: Point2D, radius: f32) -> MathResult<Self> {
        Circle::new(center, radius).map(Region::Circle)
    }

    pub fn contains_point(&self, point: Point2D) -> bool {
        match self {
            Region::Polygon(polygon) => polygon.contains_point(point),
            Region::Circle(circle) => circle.contains_point(point),
        }
    }

    pub fn bounds(&self) -> Bounds2D {
        match self {
            Region::Polygon(polygon) => polygon.bounds(),
            Region::Circle(circle) => circle.bounds(),
        }
    }

    /// Geschlossener Randring für Renderer
    pub fn boundary(&self) -> Vec<Point2D> {
        match self {
            Region::Polygon(polygon) => polygon.boundary(),
            Region::Circle(circle) => circle.boundary(CIRCLE_BOUNDARY_SAMPLES),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Polygon(polygon) => {
                write!(f, "Polygon({} vertices)", polygon.vertices().len())
            }
            Region::Circle(circle) => write!(
                f,
                "Circle(center: ({:.2}, {:.2}), r: {:.2})",
                circle.center().x,
                circle.center().y,
                circle.radius()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polygon_raises_invalid_region() {
        let result = Region::polygon(vec![]);
        assert!(matches!(result, Err(MathError::InvalidRegion { .. })));
    }

    #[test]
    fn test_circle_region_dispatch() {
        let region = Region::circle(Point2D::ZERO, 15.0).unwrap();
        assert!(region.contains_point(Point2D::new(0.0, 15.0)));
        assert!(!region.contains_point(Point2D::new(11.0, 11.0)));
        assert_eq!(region.boundary().len(), CIRCLE_BOUNDARY_SAMPLES + 1);
    }

    #[test]
    fn test_containment_is_idempotent() {
        let region = Region::polygon(vec![
            Point2D::new(0.0, 15.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(0.0, -15.0),
            Point2D::new(-10.0, 0.0),
        ])
        .unwrap();

        for p in [
            Point2D::new(0.0, 0.0),
            Point2D::new(5.0, 7.5),
            Point2D::new(9.0, 9.0),
            Point2D::new(-3.3, 1.7),
        ] {
            assert_eq!(region.contains_point(p), region.contains_point(p));
        }
    }
}
