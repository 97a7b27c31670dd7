// src/math/types/bounds.rs
use crate::math::types::*;

/// Achsenparallele Hülle von Zaun, Sperrzonen und Gitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    pub fn from_center_half_extent(center: Point2D, half_extent: f32) -> Self {
        let half = Point2D::splat(half_extent.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// `None` für eine leere Punktmenge
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self { min: first, max: first }, |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    /// Neutrales Element von `union`
    pub fn empty() -> Self {
        Self {
            min: Point2D::splat(f32::INFINITY),
            max: Point2D::splat(f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    pub fn union(&self, other: &Bounds2D) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Rand auf allen Seiten; eine leere Hülle bleibt leer
    pub fn padded(&self, margin: f32) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min - Point2D::splat(margin),
            max: self.max + Point2D::splat(margin),
        }
    }
}

impl Default for Bounds2D {
    fn default() -> Self {
        Self::empty()
    }
}
