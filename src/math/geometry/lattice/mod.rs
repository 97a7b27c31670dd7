// src/math/geometry/lattice/mod.rs
pub mod builder;
pub mod cell;

pub use builder::{Lattice, LatticeConfig};
pub use cell::{CELL_RING_LEN, cell_vertices};
