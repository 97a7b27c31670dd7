// src/math/geometry/mod.rs

pub mod lattice;
pub mod region;
pub mod transform;

pub use self::lattice::{CELL_RING_LEN, Lattice, LatticeConfig, cell_vertices};
pub use self::region::{Circle, ExclusionZone, Fence, PolygonRegion, Region, is_excluded};
pub use self::transform::{AffineTransform, Pose};
