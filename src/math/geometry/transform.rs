// src/math/geometry/transform.rs
use crate::math::{
    types::*,
    utils::{angles, rotation},
};
use serde::Serialize;
use std::fmt;

/// Starre Transformations-Matrix (3x3 für 2D, ohne Skalierung/Scherung)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    // Matrix in der Form: [a c tx]
    //                    [b d ty]
    //                    [0 0  1]
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl AffineTransform {
    /// Translation
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx,
            ty,
        }
    }

    /// Rotation um den Ursprung
    pub fn rotation(angle_rad: f32) -> Self {
        let (sin_a, cos_a) = angle_rad.sin_cos();

        Self {
            a: cos_a,
            b: sin_a,
            c: -sin_a,
            d: cos_a,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Transformations-Komposition: zuerst `other`, dann `self`
    pub fn compose(&self, other: &AffineTransform) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Transformiert einen Punkt
    pub fn transform_point(&self, point: Point2D) -> Point2D {
        Point2D::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }
}

/// Kumulative starre Transformation eines Gitters seit Suchbeginn.
///
/// Angewendet wird immer `rotate(translate(p, translation), angle)`, die
/// Rotation erfolgt also um den Weltursprung und nicht um den Schwerpunkt
/// des Gitters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pose {
    #[serde(serialize_with = "serialize_vec2")]
    pub translation: Point2D,
    pub angle: f32,
}

impl Pose {
    pub fn new(translation: Point2D, angle: f32) -> Self {
        Self { translation, angle }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    /// Addiert einen Translationsschritt auf die bisherige Verschiebung
    pub fn translate_by(&mut self, delta: Point2D) {
        self.translation += delta;
    }

    /// Setzt den Winkel neu (Rotationen akkumulieren nicht)
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn apply_to_point(&self, point: Point2D) -> Point2D {
        rotation::rotate_point(point + self.translation, self.angle)
    }

    pub fn apply_to_points(&self, points: &[Point2D]) -> Vec<Point2D> {
        let translated: Vec<Point2D> = points.iter().map(|&p| p + self.translation).collect();
        rotation::rotate_points(&translated, self.angle)
    }

    /// Dieselbe Pose als Matrix: Rotation nach Translation
    pub fn to_affine(&self) -> AffineTransform {
        AffineTransform::rotation(self.angle).compose(&AffineTransform::translation(
            self.translation.x,
            self.translation.y,
        ))
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pose(t: ({:.3}, {:.3}), θ: {:.2}°)",
            self.translation.x,
            self.translation.y,
            angles::rad_to_deg(self.angle)
        )
    }
}

pub(crate) fn serialize_vec2<S>(v: &Point2D, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    [v.x, v.y].serialize(serializer)
}
