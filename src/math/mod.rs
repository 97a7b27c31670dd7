// src/math/mod.rs
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

pub use error::{MathError, MathResult};
pub use types::*;
