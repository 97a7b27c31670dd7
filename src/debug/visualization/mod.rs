// src/debug/visualization/mod.rs
pub mod gizmos;
pub mod svg;
