//! Core types, math, and errors for the voxelize toolkit.
//!
//! This crate provides the foundational types shared by the other crates:
//! - Grid dimensions and lattice positions
//! - Geometric primitives (bounding boxes, triangles)
//! - The workspace-wide error type

pub mod coords;
pub mod error;
pub mod math;

pub use coords::{GridDims, GridPos};
pub use error::{Error, Result};
pub use math::{Aabb, Triangle};

/// Toolkit-wide constants
pub mod constants {
    /// Value stored in an empty voxel
    pub const EMPTY: u8 = 0;
    /// Value stored in a filled voxel
    pub const FILLED: u8 = 1;
    /// Relative tolerance below which a triangle's barycentric
    /// denominator is treated as zero.
    pub const DEGENERATE_EPSILON: f32 = 1e-6;
}
