// src/placement/search/state.rs
use crate::math::{geometry::transform::Pose, types::*};
use crate::placement::evaluator::Containment;
use serde::Serialize;

/// Zustand der Richtungsumkehr-Heuristik
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// Kein Wegpunkt liegt aktuell im Zielgebiet
    #[default]
    Exploring,
    /// Mindestens ein Wegpunkt liegt im Zielgebiet
    Tracking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTransition {
    Unchanged,
    /// Exploring -> Tracking
    Entered,
    /// Tracking -> Exploring; der Translationsschritt muss umgekehrt werden
    Reversed,
}

/// Eigenständige Kopie der besten gefundenen Lage
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub pose: Pose,
    pub centers: Vec<Point2D>,
    pub containment: Containment,
    /// 1-basierter Index des Suchschritts
    pub step_index: usize,
}

impl Placement {
    pub fn count_inside(&self) -> usize {
        self.containment.count_inside
    }

    pub fn xs(&self) -> Vec<f32> {
        self.centers.iter().map(|c| c.x).collect()
    }

    pub fn ys(&self) -> Vec<f32> {
        self.centers.iter().map(|c| c.y).collect()
    }
}

/// Veränderlicher Zustand, der ausschließlich der Suche gehört
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub pose: Pose,
    pub phase: SearchPhase,
    pub direction_changes: u32,
    pub max_inside: usize,
    pub best: Option<Placement>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zustandsübergang für die Zählung des aktuellen Schritts
    pub fn advance_phase(&mut self, count_inside: usize) -> PhaseTransition {
        match (self.phase, count_inside > 0) {
            (SearchPhase::Exploring, true) => {
                self.phase = SearchPhase::Tracking;
                PhaseTransition::Entered
            }
            (SearchPhase::Tracking, false) => {
                self.phase = SearchPhase::Exploring;
                self.direction_changes += 1;
                PhaseTransition::Reversed
            }
            _ => PhaseTransition::Unchanged,
        }
    }

    /// Übernimmt die Lage, wenn sie echt besser ist
    pub fn offer_best(
        &mut self,
        centers: &[Point2D],
        containment: Containment,
        step_index: usize,
    ) -> bool {
        if containment.count_inside <= self.max_inside {
            return false;
        }

        self.max_inside = containment.count_inside;
        self.best = Some(Placement {
            pose: self.pose,
            centers: centers.to_vec(),
            containment,
            step_index,
        });
        true
    }

    pub fn limit_reached(&self, max_direction_changes: u32) -> bool {
        self.direction_changes >= max_direction_changes
    }
}
