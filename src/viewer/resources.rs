// src/viewer/resources.rs
use crate::config::Scenario;
use crate::math::{
    error::MathResult,
    geometry::{lattice::Lattice, region::Fence},
    types::*,
};
use crate::placement::search::{SearchConfig, SearchOutcome, SearchStep, TransformationSearch};
use bevy::prelude::*;
use std::time::Duration;

/// Untere Grenze des Abspielintervalls
const MIN_STEP_INTERVAL_SECS: f32 = 0.001;
/// Obergrenze der Suchschritte pro Frame
pub const MAX_STEPS_PER_FRAME: u32 = 50;

/// Gitter, Zaun und Suchparameter des geladenen Szenarios
#[derive(Resource, Debug, Clone)]
pub struct PlacementScene {
    pub lattice: Lattice,
    pub fence: Fence,
    pub search: SearchConfig,
    pub gap_factor: f32,
    pub step_interval_secs: f32,
}

impl From<Scenario> for PlacementScene {
    fn from(scenario: Scenario) -> Self {
        Self {
            lattice: scenario.lattice,
            fence: scenario.fence,
            search: scenario.search,
            gap_factor: scenario.gap_factor,
            step_interval_secs: scenario.step_interval_secs,
        }
    }
}

impl PlacementScene {
    pub fn new_search(&self) -> MathResult<TransformationSearch> {
        TransformationSearch::new(
            self.lattice.clone(),
            self.fence.clone(),
            self.search.clone(),
        )
    }
}

/// Schrittweise abgespielte Suche im Modus `ViewerMode::Search`
#[derive(Resource, Debug)]
pub struct SearchPlayback {
    search: TransformationSearch,
    pub current: Option<SearchStep>,
    pub outcome: Option<SearchOutcome>,
    pub paused: bool,
    timer: Timer,
}

impl SearchPlayback {
    pub fn new(scene: &PlacementScene) -> MathResult<Self> {
        let interval = scene.step_interval_secs.max(MIN_STEP_INTERVAL_SECS);
        Ok(Self {
            search: scene.new_search()?,
            current: None,
            outcome: None,
            paused: false,
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn search(&self) -> &TransformationSearch {
        &self.search
    }

    /// Tickt den Timer und liefert die Anzahl fälliger Schritte
    pub fn due_steps(&mut self, delta: Duration) -> u32 {
        if self.paused || self.is_finished() {
            return 0;
        }
        self.timer.tick(delta);
        self.timer
            .times_finished_this_tick()
            .min(MAX_STEPS_PER_FRAME)
    }

    /// Zieht bis zu `steps` Schritte aus der Suche
    pub fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            match self.search.next() {
                Some(step) => self.current = Some(step),
                None => break,
            }
        }
        if self.search.is_finished() && self.outcome.is_none() {
            self.outcome = Some(self.search.outcome());
        }
    }
}

/// Absolute Verschiebung aus dem letzten Mausklick
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractiveOffset(pub Option<Point2D>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;

    fn scene() -> PlacementScene {
        let mut config = ScenarioConfig::custom_fence();
        config.lattice.half_extent = 3;
        config.search.rotation_steps = 5;
        PlacementScene::from(config.build().unwrap())
    }

    #[test]
    fn test_playback_runs_to_outcome() {
        let mut playback = SearchPlayback::new(&scene()).unwrap();
        assert!(playback.current.is_none());

        playback.advance(3);
        assert_eq!(playback.current.map(|s| s.index), Some(3));
        assert!(!playback.is_finished());

        playback.advance(10_000);
        let outcome = playback.outcome.as_ref().unwrap();
        assert_eq!(playback.current.map(|s| s.index), Some(outcome.steps_taken));
        assert!(playback.search().is_finished());
    }

    #[test]
    fn test_paused_playback_has_no_due_steps() {
        let mut playback = SearchPlayback::new(&scene()).unwrap();
        playback.paused = true;
        assert_eq!(playback.due_steps(Duration::from_secs(1)), 0);

        playback.paused = false;
        assert_eq!(
            playback.due_steps(Duration::from_secs(1)),
            MAX_STEPS_PER_FRAME
        );
    }
}
