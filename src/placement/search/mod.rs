// src/placement/search/mod.rs
pub mod config;
pub mod search;
pub mod state;

pub use config::SearchConfig;
pub use search::{SearchOutcome, SearchStep, Termination, TransformationSearch};
pub use state::{PhaseTransition, Placement, SearchPhase, SearchState};
