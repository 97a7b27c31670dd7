// src/placement/search/config.rs
use crate::math::{error::*, utils::angles};

/// Suchraster der Transformationssuche
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Translationsschritte, unabhängig für X und Y kombiniert
    pub translation_offsets: Vec<f32>,
    /// Anzahl Rotationswinkel pro Translationskombination, gleichmäßig über [0, 2π)
    pub rotation_steps: usize,
    /// Abbruch, sobald so viele Richtungswechsel erfolgt sind
    pub max_direction_changes: u32,
    /// Jeden Schritt im Ergebnis mitschreiben
    pub record_history: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Offsets auf `{-step, 0, +step}`
    pub fn with_translation_step(mut self, step: f32) -> Self {
        self.translation_offsets = vec![-step, 0.0, step];
        self
    }

    pub fn with_translation_offsets(mut self, offsets: Vec<f32>) -> Self {
        self.translation_offsets = offsets;
        self
    }

    pub fn with_rotation_steps(mut self, steps: usize) -> Self {
        self.rotation_steps = steps;
        self
    }

    pub fn with_max_direction_changes(mut self, changes: u32) -> Self {
        self.max_direction_changes = changes;
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Geordnete Rotationswinkel einer Translationskombination
    pub fn rotation_sweep(&self) -> Vec<f32> {
        angles::evenly_spaced(self.rotation_steps)
    }

    /// Obergrenze der Schritte (alle Kombinationen x alle Winkel)
    pub fn max_steps(&self) -> usize {
        self.translation_offsets.len().pow(2) * self.rotation_steps
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.translation_offsets.is_empty() || self.rotation_steps == 0 {
            return Err(MathError::EmptySearchSpace {
                translations: self.translation_offsets.len().pow(2),
                rotations: self.rotation_steps,
            });
        }

        if self.translation_offsets.iter().any(|o| !o.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: "Translation offsets must be finite".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            translation_offsets: vec![-0.5, 0.0, 0.5],
            rotation_steps: 100,
            max_direction_changes: 4,
            record_history: false,
        }
    }
}
