//! Geometric primitives used by the samplers.

use glam::Vec3;

use crate::constants::DEGENERATE_EPSILON;
use crate::error::{Error, Result};

/// Axis-Aligned Bounding Box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Degenerate AABB containing a single point
    #[inline]
    pub const fn from_point(point: Vec3) -> Self {
        Self::new(point, point)
    }

    /// Get the size of the AABB
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Expand AABB to include a point
    #[inline]
    pub fn expand_to_include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

/// A single triangle in continuous space.
///
/// Inclusion is decided from barycentric coordinates of the point's
/// projection onto the triangle's plane. The distance to the plane is never
/// checked, so every point of the infinite prism swept along the normal
/// counts as inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vec3; 3],
}

impl Triangle {
    /// Create a triangle, rejecting non-finite or collinear vertices.
    pub fn new(vertices: [Vec3; 3]) -> Result<Self> {
        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(Error::invalid(format!(
                "triangle vertex {bad} is not finite"
            )));
        }
        let triangle = Self { vertices };
        if triangle.is_degenerate() {
            return Err(Error::DegenerateTriangle);
        }
        Ok(triangle)
    }

    /// Bounding box of the three vertices
    pub fn aabb(&self) -> Aabb {
        let [first, rest @ ..] = self.vertices;
        let mut aabb = Aabb::from_point(first);
        for point in rest {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Entries of the 2x2 normal-equations matrix: `(dot00, dot01, dot11)`.
    #[inline]
    fn gram(&self) -> (f32, f32, f32) {
        let [p0, p1, p2] = self.vertices;
        let v0 = p1 - p0;
        let v1 = p2 - p0;
        (v0.dot(v0), v0.dot(v1), v1.dot(v1))
    }

    /// True when the edge vectors are (nearly) parallel or zero-length.
    pub fn is_degenerate(&self) -> bool {
        let (dot00, dot01, dot11) = self.gram();
        let denom = dot00 * dot11 - dot01 * dot01;
        // |v0 x v1|^2 relative to |v0|^2 |v1|^2, i.e. sin^2 of the corner angle
        !(denom > DEGENERATE_EPSILON * dot00 * dot11)
    }

    /// Barycentric coordinates `(u, v)` of `point` along the edges
    /// `p1 - p0` and `p2 - p0`.
    pub fn barycentric(&self, point: Vec3) -> (f32, f32) {
        let [p0, p1, p2] = self.vertices;
        let v0 = p1 - p0;
        let v1 = p2 - p0;
        let v2 = point - p0;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
        let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;
        (u, v)
    }

    /// Barycentric inside test, ignoring distance from the plane.
    #[inline]
    pub fn contains_projected(&self, point: Vec3) -> bool {
        let (u, v) = self.barycentric(point);
        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }
}
