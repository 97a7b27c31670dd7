// src/math/geometry/region/fence.rs
use super::{circle::Circle, region::Region};
use crate::math::{error::*, types::*};

/// Kreisförmige Sperrzone innerhalb (oder außerhalb) des Zielgebiets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone(Circle);

impl ExclusionZone {
    pub fn new(center: Point2D, radius: f32) -> MathResult<Self> {
        Circle::new(center, radius).map(Self)
    }

    pub fn circle(&self) -> &Circle {
        &self.0
    }

    pub fn contains_point(&self, point: Point2D) -> bool {
        self.0.contains_point(point)
    }
}

impl From<Circle> for ExclusionZone {
    fn from(circle: Circle) -> Self {
        Self(circle)
    }
}

/// `true`, wenn der Punkt in mindestens einer Sperrzone liegt (Rand inklusive)
pub fn is_excluded(point: Point2D, zones: &[ExclusionZone]) -> bool {
    zones.iter().any(|zone| zone.contains_point(point))
}

/// Zielgebiet zusammen mit seinen Sperrzonen
#[derive(Debug, Clone, PartialEq)]
pub struct Fence {
    pub region: Region,
    pub exclusion_zones: Vec<ExclusionZone>,
}

impl Fence {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            exclusion_zones: Vec::new(),
        }
    }

    pub fn with_exclusion_zone(mut self, zone: ExclusionZone) -> Self {
        self.exclusion_zones.push(zone);
        self
    }

    pub fn with_exclusion_zones(mut self, zones: impl IntoIterator<Item = ExclusionZone>) -> Self {
        self.exclusion_zones.extend(zones);
        self
    }

    /// Im Gebiet und in keiner Sperrzone
    pub fn admits(&self, point: Point2D) -> bool {
        self.region.contains_point(point) && !is_excluded(point, &self.exclusion_zones)
    }

    pub fn bounds(&self) -> Bounds2D {
        self.exclusion_zones
            .iter()
            .fold(self.region.bounds(), |acc, zone| acc.union(&zone.circle().bounds()))
    }
}
