// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid region: {reason}")]
    InvalidRegion { reason: String },

    #[error(
        "Empty search space: {translations} translation offsets, {rotations} rotation steps"
    )]
    EmptySearchSpace { translations: usize, rotations: usize },

    #[error("No placement found: no waypoint was ever inside the region")]
    NoPlacementFound,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
