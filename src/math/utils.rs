// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const SQRT_3: f32 = 1.732_050_8;
    pub const TAU: f32 = std::f32::consts::TAU;
    pub const PI: f32 = std::f32::consts::PI;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::{PI, TAU};

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * 180.0 / PI
    }

    /// `count` gleichmäßig verteilte Winkel über [0, 2π), beginnend bei 0.
    pub fn evenly_spaced(count: usize) -> Vec<f32> {
        (0..count)
            .map(|k| k as f32 * TAU / count as f32)
            .collect()
    }
}

/// Rotationen um den Ursprung
pub mod rotation {
    use bevy::math::Vec2;

    /// Rotiert einen Punkt gegen den Uhrzeigersinn um den Ursprung
    pub fn rotate_point(p: Vec2, angle_rad: f32) -> Vec2 {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        Vec2::new(p.x * cos_a - p.y * sin_a, p.x * sin_a + p.y * cos_a)
    }

    /// Rotiert alle Punkte um denselben Winkel
    pub fn rotate_points(points: &[Vec2], angle_rad: f32) -> Vec<Vec2> {
        let (sin_a, cos_a) = angle_rad.sin_cos();
        points
            .iter()
            .map(|p| Vec2::new(p.x * cos_a - p.y * sin_a, p.x * sin_a + p.y * cos_a))
            .collect()
    }
}
