// src/placement/search/search.rs
use super::{
    config::SearchConfig,
    state::{PhaseTransition, Placement, SearchPhase, SearchState},
};
use crate::math::{
    error::*,
    geometry::{lattice::Lattice, region::Fence, transform::Pose},
    types::*,
};
use crate::placement::evaluator::{Containment, evaluate_fence};
use bevy::log::{debug, info, warn};
use serde::Serialize;

/// Grund für das Ende der Suche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    DirectionChangeLimit,
    SearchSpaceExhausted,
    /// Der Aufrufer hat vor dem Ende aufgehört, Schritte abzurufen
    Cancelled,
}

/// Protokoll eines einzelnen Suchschritts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStep {
    /// 1-basiert
    pub index: usize,
    pub pose: Pose,
    pub containment: Containment,
    /// Bestwert nach diesem Schritt
    pub max_inside: usize,
    /// Phase nach diesem Schritt
    pub phase: SearchPhase,
    pub reversed: bool,
    pub improved: bool,
}

/// Endergebnis der Suche; nur dieses überlebt den Suchzustand.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `None`, wenn nie ein Wegpunkt im Zielgebiet lag
    pub optimal_placement: Option<Placement>,
    pub max_inside: usize,
    pub steps_taken: usize,
    pub direction_changes: u32,
    pub termination: Termination,
    pub history: Vec<SearchStep>,
}

impl SearchOutcome {
    /// Mittelpunkte der besten Lage als Punktliste
    pub fn trajectory(&self) -> Option<&[Point2D]> {
        self.optimal_placement
            .as_ref()
            .map(|placement| placement.centers.as_slice())
    }

    pub fn require_placement(&self) -> MathResult<&Placement> {
        self.optimal_placement
            .as_ref()
            .ok_or(MathError::NoPlacementFound)
    }
}

/// Lokale Suche über Translation und Rotation eines starren Gitters.
///
/// Für jede Kombination `(tx, ty)` der Offsets wird der komplette
/// Rotations-Sweep durchlaufen. Jeder Sub-Schritt addiert `(tx, ty)` erneut
/// auf die Pose, der Winkel wird dagegen pro Schritt neu gesetzt. Verlässt
/// das Gitter im Zustand `Tracking` das Zielgebiet vollständig, wird die
/// aktuelle Translationsrichtung umgekehrt. Die Umkehr von `tx` gilt bis zum
/// Ende der laufenden `tx`-Iteration, die von `ty` bis zum Ende der
/// laufenden `ty`-Iteration.
///
/// Die Suche ist ein Iterator über [`SearchStep`]; wer keine weiteren
/// Schritte abruft, bricht sie damit ab.
#[derive(Debug, Clone)]
pub struct TransformationSearch {
    lattice: Lattice,
    fence: Fence,
    config: SearchConfig,
    sweep: Vec<f32>,
    state: SearchState,
    history: Vec<SearchStep>,
    tx_index: usize,
    ty_index: usize,
    angle_index: usize,
    current_step: Point2D,
    steps_taken: usize,
    termination: Option<Termination>,
}

impl TransformationSearch {
    pub fn new(lattice: Lattice, fence: Fence, config: SearchConfig) -> MathResult<Self> {
        config.validate()?;
        let sweep = config.rotation_sweep();

        Ok(Self {
            lattice,
            fence,
            config,
            sweep,
            state: SearchState::new(),
            history: Vec::new(),
            tx_index: 0,
            ty_index: 0,
            angle_index: 0,
            current_step: Point2D::ZERO,
            steps_taken: 0,
            termination: None,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn fence(&self) -> &Fence {
        &self.fence
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Führt die Suche bis zum Ende aus
    pub fn run(mut self) -> SearchOutcome {
        info!(
            "Starting transformation search: {} waypoints, {} steps max, fence {}",
            self.lattice.len(),
            self.config.max_steps(),
            self.fence.region
        );
        while self.next().is_some() {}
        self.outcome()
    }

    /// Momentaufnahme des Ergebnisses; vor dem Ende gilt die Suche als abgebrochen.
    pub fn outcome(&self) -> SearchOutcome {
        let termination = self.termination.unwrap_or(Termination::Cancelled);
        SearchOutcome {
            optimal_placement: self.state.best.clone(),
            max_inside: self.state.max_inside,
            steps_taken: self.steps_taken,
            direction_changes: self.state.direction_changes,
            termination,
            history: self.history.clone(),
        }
    }

    fn execute_step(&mut self) -> SearchStep {
        let offsets = &self.config.translation_offsets;
        if self.angle_index == 0 {
            // Beginn einer neuen ty-Iteration; tx nur zu Beginn einer tx-Iteration
            if self.ty_index == 0 {
                self.current_step.x = offsets[self.tx_index];
            }
            self.current_step.y = offsets[self.ty_index];
        }

        let angle = self.sweep[self.angle_index];
        self.state.pose.translate_by(self.current_step);
        self.state.pose = self.state.pose.with_angle(angle);

        let centers = self.lattice.transformed(&self.state.pose);
        let containment = evaluate_fence(&centers, &self.fence);
        self.steps_taken += 1;

        let improved = self
            .state
            .offer_best(&centers, containment, self.steps_taken);
        if improved {
            debug!(
                "Step {}: new best {} waypoints at {}",
                self.steps_taken, containment.count_inside, self.state.pose
            );
        }

        let reversed = match self.state.advance_phase(containment.count_inside) {
            PhaseTransition::Reversed => {
                self.current_step = -self.current_step;
                debug!(
                    "Step {}: fence lost, reversing direction ({} of {})",
                    self.steps_taken,
                    self.state.direction_changes,
                    self.config.max_direction_changes
                );
                true
            }
            PhaseTransition::Entered | PhaseTransition::Unchanged => false,
        };

        SearchStep {
            index: self.steps_taken,
            pose: self.state.pose,
            containment,
            max_inside: self.state.max_inside,
            phase: self.state.phase,
            reversed,
            improved,
        }
    }

    fn advance_indices(&mut self) {
        self.angle_index += 1;
        if self.angle_index < self.sweep.len() {
            return;
        }
        self.angle_index = 0;
        self.ty_index += 1;
        if self.ty_index < self.config.translation_offsets.len() {
            return;
        }
        self.ty_index = 0;
        self.tx_index += 1;
        if self.tx_index >= self.config.translation_offsets.len() {
            self.termination = Some(Termination::SearchSpaceExhausted);
        }
    }
}

impl Iterator for TransformationSearch {
    type Item = SearchStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termination.is_some() {
            return None;
        }

        let step = self.execute_step();
        if self.config.record_history {
            self.history.push(step);
        }

        if self.state.limit_reached(self.config.max_direction_changes) {
            self.termination = Some(Termination::DirectionChangeLimit);
        } else {
            self.advance_indices();
        }

        if let Some(termination) = self.termination {
            info!(
                "Search finished after {} steps ({:?}): max {} waypoints inside, {} direction changes",
                self.steps_taken,
                termination,
                self.state.max_inside,
                self.state.direction_changes
            );
            if self.state.best.is_none() {
                warn!(
                    "Search ended ({:?}) after {} steps without any waypoint inside the fence",
                    termination, self.steps_taken
                );
            }
        }

        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        geometry::region::{ExclusionZone, Region},
        utils::angles::deg_to_rad,
    };
    use crate::config::ScenarioConfig;
    use crate::placement::evaluator::evaluate;
    use approx::assert_abs_diff_eq;

    fn reference_lattice() -> Lattice {
        Lattice::build(2.0, deg_to_rad(60.0), deg_to_rad(60.0), 10)
    }

    fn custom_fence() -> Fence {
        let xs = [0.0, 5.0, 8.0, 10.0, 8.0, 5.0, 0.0, -5.0, -8.0, -10.0, -8.0, -5.0, 0.0];
        let ys = [15.0, 10.0, 5.0, 0.0, -5.0, -10.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0];
        let vertices = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Fence::new(Region::polygon(vertices).unwrap())
    }

    /// Einzelner Wegpunkt im Ursprung; Kreis um den Ursprung ist rotationsinvariant
    fn single_point_search(offsets: Vec<f32>, rotation_steps: usize, max_changes: u32) -> TransformationSearch {
        let lattice = Lattice::build(2.0, 0.0, 0.0, 0);
        let fence = Fence::new(Region::circle(Point2D::ZERO, 1.0).unwrap());
        let config = SearchConfig::default()
            .with_translation_offsets(offsets)
            .with_rotation_steps(rotation_steps)
            .with_max_direction_changes(max_changes)
            .with_history(true);
        TransformationSearch::new(lattice, fence, config).unwrap()
    }

    #[test]
    fn test_rejects_empty_search_space() {
        let config = SearchConfig::default().with_rotation_steps(0);
        let result = TransformationSearch::new(reference_lattice(), custom_fence(), config);
        assert!(matches!(result, Err(MathError::EmptySearchSpace { .. })));
    }

    #[test]
    fn test_circular_fence_reference_outcome() {
        let scenario = ScenarioConfig::circular_fence().build().unwrap();
        let outcome = TransformationSearch::new(scenario.lattice, scenario.fence, scenario.search)
            .unwrap()
            .run();

        assert_eq!(outcome.max_inside, 57);
        assert_eq!(outcome.steps_taken, 582);
        assert_eq!(outcome.termination, Termination::DirectionChangeLimit);
        assert_eq!(outcome.direction_changes, 4);
        let best = outcome.require_placement().unwrap();
        assert_eq!(best.step_index, 25);
        assert_eq!(best.count_inside(), 57);
    }

    #[test]
    fn test_reference_search_terminates_within_grid() {
        let config = SearchConfig::default().with_history(true);
        let max_steps = config.max_steps();
        let outcome = TransformationSearch::new(reference_lattice(), custom_fence(), config)
            .unwrap()
            .run();

        assert!(outcome.steps_taken > 0);
        assert!(outcome.steps_taken <= max_steps);
        assert_eq!(outcome.history.len(), outcome.steps_taken);
        match outcome.termination {
            Termination::DirectionChangeLimit => assert_eq!(outcome.direction_changes, 4),
            Termination::SearchSpaceExhausted => {
                assert_eq!(outcome.steps_taken, max_steps);
                assert!(outcome.direction_changes < 4);
            }
            Termination::Cancelled => panic!("run() must not end cancelled"),
        }
    }

    #[test]
    fn test_best_is_non_decreasing() {
        let config = SearchConfig::default().with_history(true);
        let outcome = TransformationSearch::new(reference_lattice(), custom_fence(), config)
            .unwrap()
            .run();

        for pair in outcome.history.windows(2) {
            assert!(pair[1].max_inside >= pair[0].max_inside);
        }
        let last = outcome.history.last().unwrap();
        assert_eq!(last.max_inside, outcome.max_inside);
    }

    #[test]
    fn test_optimal_placement_matches_its_pose() {
        let lattice = reference_lattice();
        let fence = custom_fence();
        let outcome = TransformationSearch::new(lattice.clone(), fence.clone(), SearchConfig::default())
            .unwrap()
            .run();

        let best = outcome.require_placement().unwrap();
        assert_eq!(best.count_inside(), outcome.max_inside);
        assert_eq!(outcome.trajectory(), Some(best.centers.as_slice()));
        assert_eq!(evaluate_fence(&best.centers, &fence).count_inside, outcome.max_inside);

        let recomputed = lattice.transformed(&best.pose);
        for (a, b) in recomputed.iter().zip(&best.centers) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_direction_reversal_and_limit() {
        let outcome = single_point_search(vec![0.5], 50, 4).run();

        assert_eq!(outcome.termination, Termination::DirectionChangeLimit);
        assert_eq!(outcome.direction_changes, 4);
        assert_eq!(outcome.steps_taken, 14);

        let reversals: Vec<usize> = outcome
            .history
            .iter()
            .filter(|s| s.reversed)
            .map(|s| s.index)
            .collect();
        assert_eq!(reversals, vec![2, 6, 10, 14]);

        // Erste Lage mit einem Treffer bleibt die beste (nur echte Verbesserung zählt)
        let best = outcome.require_placement().unwrap();
        assert_eq!(best.step_index, 1);
        assert_eq!(outcome.max_inside, 1);
        assert_eq!(best.pose.translation, Point2D::new(0.5, 0.5));
    }

    #[test]
    fn test_reversal_persistence_across_loops() {
        let outcome = single_point_search(vec![0.5, 0.0], 2, 100).run();
        let translations: Vec<Point2D> = outcome.history.iter().map(|s| s.pose.translation).collect();

        // (tx, ty) = (0.5, 0.5): drinnen, dann draußen -> Umkehr
        assert_eq!(translations[0], Point2D::new(0.5, 0.5));
        assert_eq!(translations[1], Point2D::new(1.0, 1.0));
        assert!(outcome.history[1].reversed);
        // ty wird zurückgesetzt (0.0), tx bleibt umgekehrt (-0.5)
        assert_eq!(translations[2], Point2D::new(0.5, 1.0));
        assert_eq!(translations[3], Point2D::new(0.0, 1.0));
        // Neue tx-Iteration: tx = 0.0, ty = 0.5
        assert_eq!(translations[4], Point2D::new(0.0, 1.5));
    }

    #[test]
    fn test_angles_follow_sweep_and_reset() {
        let outcome = single_point_search(vec![0.0], 4, 100).run();
        let angles: Vec<f32> = outcome.history.iter().map(|s| s.pose.angle).collect();
        let sweep = SearchConfig::default().with_rotation_steps(4).rotation_sweep();
        assert_eq!(angles, sweep);
        assert_eq!(outcome.termination, Termination::SearchSpaceExhausted);
    }

    #[test]
    fn test_no_placement_found_is_explicit() {
        let fence = Fence::new(Region::circle(Point2D::new(500.0, 500.0), 5.0).unwrap());
        let config = SearchConfig::default();
        let max_steps = config.max_steps();
        let outcome = TransformationSearch::new(reference_lattice(), fence, config)
            .unwrap()
            .run();

        assert!(outcome.optimal_placement.is_none());
        assert!(outcome.trajectory().is_none());
        assert_eq!(outcome.max_inside, 0);
        assert_eq!(outcome.direction_changes, 0);
        assert_eq!(outcome.steps_taken, max_steps);
        assert_eq!(outcome.termination, Termination::SearchSpaceExhausted);
        assert_eq!(outcome.require_placement(), Err(MathError::NoPlacementFound));
    }

    #[test]
    fn test_exclusion_zones_are_respected() {
        let fence = Fence::new(Region::circle(Point2D::ZERO, 15.0).unwrap()).with_exclusion_zones([
            ExclusionZone::new(Point2D::new(-5.0, 5.0), 5.0).unwrap(),
            ExclusionZone::new(Point2D::new(5.0, -5.0), 5.0).unwrap(),
        ]);
        let outcome = TransformationSearch::new(reference_lattice(), fence.clone(), SearchConfig::default())
            .unwrap()
            .run();

        let best = outcome.require_placement().unwrap();
        let region_only = evaluate(&best.centers, &fence.region, &[]).count_inside;
        assert!(best.count_inside() <= region_only);
        assert_eq!(evaluate_fence(&best.centers, &fence).count_inside, best.count_inside());
    }

    #[test]
    fn test_cancel_by_not_pulling() {
        let mut search = single_point_search(vec![0.5, 0.0, -0.5], 10, 100);
        let first: Vec<SearchStep> = search.by_ref().take(3).collect();
        assert_eq!(first.len(), 3);
        assert!(!search.is_finished());

        let outcome = search.outcome();
        assert_eq!(outcome.termination, Termination::Cancelled);
        assert_eq!(outcome.steps_taken, 3);
    }
}
