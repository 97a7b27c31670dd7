// src/viewer/state.rs
use bevy::prelude::*;

/// Die beiden unabhängigen Einstiegspunkte über demselben Gitter und Zaun
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ViewerMode {
    /// Animierte Transformationssuche
    #[default]
    Search,
    /// Gitter per Mausklick absolut verschieben, ohne Auswertung
    Interactive,
}

impl ViewerMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewerMode::Search => "Suche",
            ViewerMode::Interactive => "Interaktiv",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewerMode::Search => ViewerMode::Interactive,
            ViewerMode::Interactive => ViewerMode::Search,
        }
    }
}
