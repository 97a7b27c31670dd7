// src/math/geometry/region/mod.rs
pub mod circle;
pub mod fence;
pub mod polygon;
pub mod region;

pub use circle::Circle;
pub use fence::{ExclusionZone, Fence, is_excluded};
pub use polygon::PolygonRegion;
pub use region::Region;
