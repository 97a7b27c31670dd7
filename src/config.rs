// src/config.rs
//! Szenario-Konfiguration (YAML) und die eingebauten Presets.

use crate::math::{
    error::*,
    geometry::{
        lattice::{Lattice, LatticeConfig},
        region::{ExclusionZone, Fence, Region},
    },
    types::*,
};
use crate::placement::search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to read config file: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid scenario: {0}")]
    Invalid(#[from] MathError),
}

/// Gitterparameter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeSection {
    pub radius: f32,
    pub hexagon_twist_deg: f32,
    pub grid_twist_deg: f32,
    pub gap_factor: f32,
    pub half_extent: u32,
}

impl Default for LatticeSection {
    fn default() -> Self {
        let defaults = LatticeConfig::default();
        Self {
            radius: defaults.radius,
            hexagon_twist_deg: defaults.hexagon_twist_deg,
            grid_twist_deg: defaults.grid_twist_deg,
            gap_factor: defaults.gap_factor,
            half_extent: defaults.half_extent,
        }
    }
}

impl LatticeSection {
    pub fn to_lattice_config(&self) -> LatticeConfig {
        LatticeConfig {
            radius: self.radius,
            hexagon_twist_deg: self.hexagon_twist_deg,
            grid_twist_deg: self.grid_twist_deg,
            gap_factor: self.gap_factor,
            half_extent: self.half_extent,
        }
    }
}

/// Zielgebiet: Polygon oder Kreis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegionSection {
    Polygon { vertices: Vec<[f32; 2]> },
    Circle { center: [f32; 2], radius: f32 },
}

impl Default for RegionSection {
    fn default() -> Self {
        custom_fence_region()
    }
}

impl RegionSection {
    pub fn to_region(&self) -> MathResult<Region> {
        match self {
            RegionSection::Polygon { vertices } => Region::polygon(
                vertices
                    .iter()
                    .map(|&[x, y]| Point2D::new(x, y))
                    .collect(),
            ),
            RegionSection::Circle { center, radius } => {
                Region::circle(Point2D::new(center[0], center[1]), *radius)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZoneSection {
    pub center: [f32; 2],
    pub radius: f32,
}

impl ExclusionZoneSection {
    pub fn to_zone(&self) -> MathResult<ExclusionZone> {
        ExclusionZone::new(Point2D::new(self.center[0], self.center[1]), self.radius)
    }
}

/// Suchraster
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub translation_step: f32,
    pub rotation_steps: usize,
    pub max_direction_changes: u32,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            translation_step: 0.5,
            rotation_steps: 100,
            max_direction_changes: 4,
        }
    }
}

impl SearchSection {
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_translation_step(self.translation_step)
            .with_rotation_steps(self.rotation_steps)
            .with_max_direction_changes(self.max_direction_changes)
    }
}

/// Animation im Viewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSection {
    pub step_interval_secs: f32,
}

impl Default for PlaybackSection {
    fn default() -> Self {
        Self {
            step_interval_secs: 0.01,
        }
    }
}

/// Vollständiges Szenario, aus YAML geladen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub lattice: LatticeSection,

    #[serde(default)]
    pub region: RegionSection,

    #[serde(default)]
    pub exclusion_zones: Vec<ExclusionZoneSection>,

    #[serde(default)]
    pub search: SearchSection,

    #[serde(default)]
    pub playback: PlaybackSection,
}

/// Validierte, einsatzbereite Bausteine eines Szenarios
#[derive(Debug, Clone)]
pub struct Scenario {
    pub lattice: Lattice,
    pub fence: Fence,
    pub search: SearchConfig,
    pub gap_factor: f32,
    pub step_interval_secs: f32,
}

impl ScenarioConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Zwölfeckiger, drachenförmiger Zaun ohne Sperrzonen
    pub fn custom_fence() -> Self {
        Self {
            region: custom_fence_region(),
            ..Default::default()
        }
    }

    /// Kreiszaun (r = 15) mit zwei Sperrkreisen (r = 5)
    pub fn circular_fence() -> Self {
        Self {
            region: RegionSection::Circle {
                center: [0.0, 0.0],
                radius: 15.0,
            },
            exclusion_zones: vec![
                ExclusionZoneSection {
                    center: [-5.0, 5.0],
                    radius: 5.0,
                },
                ExclusionZoneSection {
                    center: [5.0, -5.0],
                    radius: 5.0,
                },
            ],
            ..Default::default()
        }
    }

    pub fn build(&self) -> MathResult<Scenario> {
        let lattice = Lattice::from_config(&self.lattice.to_lattice_config())?;
        let zones = self
            .exclusion_zones
            .iter()
            .map(ExclusionZoneSection::to_zone)
            .collect::<MathResult<Vec<_>>>()?;
        let fence = Fence::new(self.region.to_region()?).with_exclusion_zones(zones);

        let search = self.search.to_search_config();
        search.validate()?;

        if !(self.playback.step_interval_secs >= 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: "Playback interval must not be negative".to_string(),
            });
        }

        Ok(Scenario {
            lattice,
            fence,
            search,
            gap_factor: self.lattice.gap_factor,
            step_interval_secs: self.playback.step_interval_secs,
        })
    }
}

fn custom_fence_region() -> RegionSection {
    const XS: [f32; 13] = [
        0.0, 5.0, 8.0, 10.0, 8.0, 5.0, 0.0, -5.0, -8.0, -10.0, -8.0, -5.0, 0.0,
    ];
    const YS: [f32; 13] = [
        15.0, 10.0, 5.0, 0.0, -5.0, -10.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0,
    ];
    RegionSection::Polygon {
        vertices: XS.iter().zip(YS.iter()).map(|(&x, &y)| [x, y]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::evaluator::{evaluate, evaluate_fence};

    #[test]
    fn test_presets_build() {
        let custom = ScenarioConfig::custom_fence().build().unwrap();
        assert_eq!(custom.lattice.len(), 441);
        assert!(custom.fence.exclusion_zones.is_empty());
        assert!(matches!(custom.fence.region, Region::Polygon(_)));
        assert_eq!(custom.search.max_steps(), 900);

        let circular = ScenarioConfig::circular_fence().build().unwrap();
        assert_eq!(circular.fence.exclusion_zones.len(), 2);
        assert!(matches!(circular.fence.region, Region::Circle(_)));
    }

    #[test]
    fn test_circular_fence_exclusion_effect() {
        let scenario = ScenarioConfig::circular_fence().build().unwrap();
        let centers = scenario.lattice.centers();

        let with_zones = evaluate_fence(centers, &scenario.fence).count_inside;
        let without_zones = evaluate(centers, &scenario.fence.region, &[]).count_inside;
        assert!(with_zones < without_zones);
    }

    #[test]
    fn test_from_yaml_with_defaults() {
        let yaml = r#"
region:
  type: circle
  center: [1.0, 2.0]
  radius: 8.0
exclusion_zones:
  - center: [0.0, 0.0]
    radius: 1.5
search:
  rotation_steps: 36
"#;
        let config = ScenarioConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.region,
            RegionSection::Circle {
                center: [1.0, 2.0],
                radius: 8.0
            }
        );
        assert_eq!(config.search.rotation_steps, 36);
        assert_eq!(config.search.translation_step, 0.5);
        assert_eq!(config.lattice, LatticeSection::default());

        let scenario = config.build().unwrap();
        assert_eq!(scenario.search.rotation_sweep().len(), 36);
        assert_eq!(scenario.fence.exclusion_zones.len(), 1);
    }

    #[test]
    fn test_yaml_roundtrip_of_preset() {
        let preset = ScenarioConfig::circular_fence();
        let yaml = preset.to_yaml().unwrap();
        assert_eq!(ScenarioConfig::from_yaml(&yaml).unwrap(), preset);
    }

    #[test]
    fn test_empty_polygon_is_rejected() {
        let config = ScenarioConfig {
            region: RegionSection::Polygon { vertices: vec![] },
            ..Default::default()
        };
        assert!(matches!(
            config.build(),
            Err(MathError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_zero_rotation_steps_is_rejected() {
        let mut config = ScenarioConfig::custom_fence();
        config.search.rotation_steps = 0;
        assert!(matches!(
            config.build(),
            Err(MathError::EmptySearchSpace { .. })
        ));
    }

    #[test]
    fn test_oversized_half_extent_is_rejected() {
        let mut config = ScenarioConfig::custom_fence();
        config.lattice.half_extent = 3_000_000_000;
        assert!(matches!(
            config.build(),
            Err(MathError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        let result = ScenarioConfig::from_yaml("region: [this is not a region");
        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ScenarioConfig::load(Path::new("does/not/exist.yaml"));
        assert!(matches!(result, Err(ConfigLoadError::Io(_))));
    }
}
