// src/math/geometry/region/circle.rs
use crate::math::{error::*, types::*, utils::angles};

/// Kreis mit geschlossenem Rand: `|p - center| <= radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2D,
    radius: f32,
}

impl Circle {
    pub fn new(center: Point2D, radius: f32) -> MathResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MathError::InvalidRegion {
                reason: format!("circle radius must be positive, got {}", radius),
            });
        }
        if !center.is_finite() {
            return Err(MathError::InvalidRegion {
                reason: format!("circle center must be finite, got {:?}", center),
            });
        }

        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point2D {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn contains_point(&self, point: Point2D) -> bool {
        point.distance(self.center) <= self.radius
    }

    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_center_half_extent(self.center, self.radius)
    }

    /// Rand als Punktfolge über [0, 2π] (erster und letzter Punkt fallen zusammen)
    pub fn boundary(&self, samples: usize) -> Vec<Point2D> {
        let mut ring: Vec<Point2D> = angles::evenly_spaced(samples.max(3))
            .into_iter()
            .map(|t| self.center + self.radius * Point2D::new(t.cos(), t.sin()))
            .collect();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }
}
