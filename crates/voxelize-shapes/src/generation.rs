//! Shape generators.
//!
//! Every generator is a pure function of its parameters and returns a
//! freshly allocated grid owned by the caller.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use voxelize_core::{Error, Result, Triangle};
use voxelize_grid::VoxelGrid;

use crate::implicit::{Cone, Cylinder, Sphere, Torus};
use crate::sampler::{sample_implicit, sample_triangle, validate_resolution};
use crate::Resolution;

/// Voxelize a sphere into a `resolution³` grid.
pub fn voxelize_sphere(resolution: Resolution) -> Result<VoxelGrid> {
    sample_implicit(&Sphere::from_resolution(resolution), resolution)
}

/// Voxelize a cone (base at `z = 0`) into a `resolution³` grid.
pub fn voxelize_cone(resolution: Resolution) -> Result<VoxelGrid> {
    sample_implicit(&Cone::from_resolution(resolution), resolution)
}

/// Voxelize a cylinder into a `resolution³` grid.
pub fn voxelize_cylinder(resolution: Resolution) -> Result<VoxelGrid> {
    sample_implicit(&Cylinder::from_resolution(resolution), resolution)
}

/// Voxelize a torus into a `resolution³` grid.
pub fn voxelize_torus(resolution: Resolution) -> Result<VoxelGrid> {
    sample_implicit(&Torus::from_resolution(resolution), resolution)
}

/// Voxelize the bounding region of a single triangle.
///
/// `resolution` is the number of samples per unit length. Fails with
/// [`Error::DegenerateTriangle`] for collinear vertices and with
/// [`Error::InvalidParameter`] when any grid axis would be empty.
pub fn voxelize_triangle(vertices: [[f32; 3]; 3], resolution: Resolution) -> Result<VoxelGrid> {
    validate_resolution(resolution)?;
    let triangle = Triangle::new(vertices.map(Vec3::from_array))?;
    sample_triangle(&triangle, resolution)
}

/// Shapes selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Cone,
    Cylinder,
    Torus,
    Triangle,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Sphere,
        Self::Cone,
        Self::Cylinder,
        Self::Torus,
        Self::Triangle,
    ];

    /// Lowercase name as accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Torus => "torus",
            Self::Triangle => "triangle",
        }
    }

    /// Whether this kind needs triangle vertices.
    pub const fn needs_vertices(self) -> bool {
        matches!(self, Self::Triangle)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid(format!(
                    "unknown shape '{s}' (expected sphere, cone, cylinder, torus or triangle)"
                ))
            })
    }
}

/// Dispatch to the generator for `kind`.
///
/// `vertices` is required for [`ShapeKind::Triangle`] and rejected for
/// every other kind.
pub fn voxelize_shape(
    kind: ShapeKind,
    resolution: Resolution,
    vertices: Option<[[f32; 3]; 3]>,
) -> Result<VoxelGrid> {
    match (kind, vertices) {
        (ShapeKind::Sphere, None) => voxelize_sphere(resolution),
        (ShapeKind::Cone, None) => voxelize_cone(resolution),
        (ShapeKind::Cylinder, None) => voxelize_cylinder(resolution),
        (ShapeKind::Torus, None) => voxelize_torus(resolution),
        (ShapeKind::Triangle, Some(vertices)) => voxelize_triangle(vertices, resolution),
        (ShapeKind::Triangle, None) => Err(Error::invalid("triangle needs three vertices")),
        (kind, Some(_)) => Err(Error::invalid(format!(
            "vertices only apply to triangle, not {kind}"
        ))),
    }
}
