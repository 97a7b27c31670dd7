// src/math/geometry/lattice/builder.rs
use super::cell::{CELL_RING_LEN, cell_vertices};
use crate::math::{
    error::*,
    geometry::transform::Pose,
    types::*,
    utils::{angles, constants::SQRT_3, rotation},
};
use bevy::log::debug;

/// Obergrenze für K; ergibt höchstens 2001² ≈ 4 Mio. Zellen
pub const MAX_HALF_EXTENT: u32 = 1000;

/// Parameter für den Aufbau eines Wabengitters
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeConfig {
    /// Umkreisradius einer Zelle
    pub radius: f32,
    pub hexagon_twist_deg: f32,
    pub grid_twist_deg: f32,
    /// Skalierung der gezeichneten Zellen (< 1 lässt eine Fuge stehen)
    pub gap_factor: f32,
    /// Fenster der axialen Indizes: [-K, K] x [-K, K]
    pub half_extent: u32,
}

impl LatticeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_twist_deg(mut self, hexagon_twist_deg: f32, grid_twist_deg: f32) -> Self {
        self.hexagon_twist_deg = hexagon_twist_deg;
        self.grid_twist_deg = grid_twist_deg;
        self
    }

    pub fn with_half_extent(mut self, half_extent: u32) -> Self {
        self.half_extent = half_extent;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MathError::InvalidConfiguration {
                message: format!("Cell radius must be positive, got {}", self.radius),
            });
        }

        if !self.hexagon_twist_deg.is_finite() || !self.grid_twist_deg.is_finite() {
            return Err(MathError::InvalidConfiguration {
                message: "Twist angles must be finite".to_string(),
            });
        }

        if self.half_extent > MAX_HALF_EXTENT {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Half extent {} exceeds the limit of {}",
                    self.half_extent, MAX_HALF_EXTENT
                ),
            });
        }

        if !(self.gap_factor > 0.0 && self.gap_factor <= 1.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Gap factor must be in (0.0, 1.0]".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            hexagon_twist_deg: 60.0,
            grid_twist_deg: 60.0,
            gap_factor: 0.999,
            half_extent: 10,
        }
    }
}

/// Wabengitter aus Zellmittelpunkten (Wegpunkten).
///
/// Die Reihenfolge entspricht der erzeugenden Doppelschleife (i außen,
/// j innen) und ist nur für Reproduzierbarkeit relevant.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    centers: Vec<Point2D>,
    radius: f32,
    cell_phase: f32,
}

impl Lattice {
    /// Baut das Gitter und verdreht es nacheinander um beide Twist-Winkel.
    pub fn build(
        radius: f32,
        hexagon_twist_rad: f32,
        grid_twist_rad: f32,
        half_extent: u32,
    ) -> Self {
        let k = i64::from(half_extent);
        let side = (2 * k + 1) as usize;
        let mut centers = Vec::with_capacity(side * side);

        for i in -k..=k {
            for j in -k..=k {
                // rem_euclid: für negative ungerade j ergibt sich 1, nicht -1
                let parity = j.rem_euclid(2) as f32;
                let cx = 3.0 * radius * j as f32 - j as f32 * 1.5 * radius;
                let cy = SQRT_3 * radius * i as f32 + parity * SQRT_3 * radius / 2.0;
                centers.push(Point2D::new(cx, cy));
            }
        }

        let twisted = rotation::rotate_points(&centers, hexagon_twist_rad);
        let centers = rotation::rotate_points(&twisted, grid_twist_rad);

        debug!(
            "Lattice built: {} centers (K = {}, r = {})",
            centers.len(),
            half_extent,
            radius
        );

        Self {
            centers,
            radius,
            cell_phase: hexagon_twist_rad + grid_twist_rad,
        }
    }

    pub fn from_config(config: &LatticeConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self::build(
            config.radius,
            angles::deg_to_rad(config.hexagon_twist_deg),
            angles::deg_to_rad(config.grid_twist_deg),
            config.half_extent,
        ))
    }

    pub fn centers(&self) -> &[Point2D] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Phase der Zellecken (Summe beider Twist-Winkel)
    pub fn cell_phase(&self) -> f32 {
        self.cell_phase
    }

    /// Verschiebt alle Mittelpunkte um einen absoluten Offset.
    ///
    /// Der Offset wirkt auf das bereits verdrehte Gitter.
    pub fn translated(&self, offset: Point2D) -> Vec<Point2D> {
        self.centers.iter().map(|&c| c + offset).collect()
    }

    /// Mittelpunkte unter einer Pose
    pub fn transformed(&self, pose: &Pose) -> Vec<Point2D> {
        pose.apply_to_points(&self.centers)
    }

    /// Zellringe des untransformierten Gitters
    pub fn cells(&self, gap_factor: f32) -> Vec<[Point2D; CELL_RING_LEN]> {
        self.centers
            .iter()
            .map(|&c| cell_vertices(c, gap_factor * self.radius, self.cell_phase))
            .collect()
    }

    /// Zellringe unter einer Pose; die Sechsecke drehen mit dem Gitter mit.
    pub fn cells_for_pose(&self, pose: &Pose, gap_factor: f32) -> Vec<[Point2D; CELL_RING_LEN]> {
        let transform = pose.to_affine();
        self.cells(gap_factor)
            .into_iter()
            .map(|ring| ring.map(|vertex| transform.transform_point(vertex)))
            .collect()
    }
}
