// src/placement/mod.rs
pub mod evaluator;
pub mod report;
pub mod search;

pub use evaluator::{Containment, evaluate, evaluate_fence, partition};
pub use report::SearchReport;
pub use search::{
    Placement, SearchConfig, SearchOutcome, SearchPhase, SearchStep, Termination,
    TransformationSearch,
};
