// src/placement/report.rs
use super::search::{SearchOutcome, Termination};
use crate::math::geometry::transform::Pose;
use serde::Serialize;

/// Beste Lage in Berichtsform (zwei Koordinatenfolgen)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    pub pose: Pose,
    pub step_index: usize,
    pub count_inside: usize,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
}

/// Konsolen-/Log-Ausgabe des Suchergebnisses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub max_inside: usize,
    pub steps_taken: usize,
    pub direction_changes: u32,
    pub termination: Termination,
    /// `null`, wenn keine Lage gefunden wurde
    pub optimal_placement: Option<PlacementReport>,
}

impl SearchReport {
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        Self {
            max_inside: outcome.max_inside,
            steps_taken: outcome.steps_taken,
            direction_changes: outcome.direction_changes,
            termination: outcome.termination,
            optimal_placement: outcome
                .optimal_placement
                .as_ref()
                .map(|placement| PlacementReport {
                    pose: placement.pose,
                    step_index: placement.step_index,
                    count_inside: placement.count_inside(),
                    x: placement.xs(),
                    y: placement.ys(),
                }),
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Einzeilige Zusammenfassung für das Log
    pub fn summary(&self) -> String {
        match &self.optimal_placement {
            Some(placement) => format!(
                "Max waypoints inside: {} (step {}, {}), {} steps, {} direction changes, {:?}",
                self.max_inside,
                placement.step_index,
                placement.pose,
                self.steps_taken,
                self.direction_changes,
                self.termination
            ),
            None => format!(
                "No placement found after {} steps ({:?})",
                self.steps_taken, self.termination
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point2D;
    use crate::placement::{evaluator::Containment, search::state::Placement};

    fn outcome(placement: Option<Placement>) -> SearchOutcome {
        SearchOutcome {
            max_inside: placement.as_ref().map_or(0, |p| p.count_inside()),
            optimal_placement: placement,
            steps_taken: 12,
            direction_changes: 4,
            termination: Termination::DirectionChangeLimit,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_report_with_placement() {
        let placement = Placement {
            pose: Pose::new(Point2D::new(0.5, -0.5), 0.25),
            centers: vec![Point2D::new(1.0, 2.0), Point2D::new(-1.0, 0.5)],
            containment: Containment {
                count_inside: 2,
                last_inside: Some(Point2D::new(-1.0, 0.5)),
            },
            step_index: 3,
        };
        let report = SearchReport::from_outcome(&outcome(Some(placement)));

        let placement = report.optimal_placement.as_ref().unwrap();
        assert_eq!(placement.x, vec![1.0, -1.0]);
        assert_eq!(placement.y, vec![2.0, 0.5]);
        assert!(report.summary().starts_with("Max waypoints inside: 2"));

        let yaml = report.to_yaml().unwrap();
        assert!(yaml.contains("max_inside: 2"));
        assert!(yaml.contains("termination: direction_change_limit"));
        assert!(yaml.contains("translation:"));
    }

    #[test]
    fn test_report_without_placement() {
        let report = SearchReport::from_outcome(&outcome(None));
        assert!(report.optimal_placement.is_none());
        assert!(report.summary().starts_with("No placement found"));

        let yaml = report.to_yaml().unwrap();
        assert!(yaml.contains("optimal_placement: null"));
    }
}
