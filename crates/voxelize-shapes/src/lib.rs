//! Voxelization of parametric solids and single triangles.
//!
//! Implicit shapes (sphere, cone, cylinder, torus) are tested directly at
//! integer lattice coordinates of a `resolution³` grid. Triangles are
//! tested at voxel centres inside their bounding box, with `resolution`
//! acting as a sampling density. The two paths are kept separate because
//! they produce different numeric results.

pub mod generation;
pub mod implicit;
pub mod sampler;

pub use generation::{
    voxelize_cone, voxelize_cylinder, voxelize_shape, voxelize_sphere, voxelize_torus,
    voxelize_triangle, ShapeKind,
};
pub use implicit::{Cone, Cylinder, ImplicitShape, Sphere, Torus};
pub use sampler::{sample_implicit, sample_triangle};

/// Lattice density / extent parameter shared by all generators.
pub type Resolution = u32;
