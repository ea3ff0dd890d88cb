//! Closed-form inside/outside predicates.
//!
//! All predicates are defined in grid-index space: a shape built for a
//! given resolution expects lattice coordinates in `[0, resolution)`.

use glam::{DVec2, DVec3};

use crate::Resolution;

/// A solid described by an inside/outside test.
pub trait ImplicitShape {
    /// Short lowercase name, used in logs.
    fn name(&self) -> &'static str;

    /// Returns true if `point` lies inside or on the surface.
    fn contains(&self, point: DVec3) -> bool;
}

/// Sphere inscribed in the lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

impl Sphere {
    pub fn from_resolution(resolution: Resolution) -> Self {
        let n = f64::from(resolution);
        Self {
            center: DVec3::splat((n - 1.0) / 2.0),
            radius: n / 2.0,
        }
    }
}

impl ImplicitShape for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn contains(&self, point: DVec3) -> bool {
        point.distance(self.center) <= self.radius
    }
}

/// Cone with its base on `z = 0` and apex at `z = height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    pub axis: DVec2,
    pub base_radius: f64,
    pub height: f64,
}

impl Cone {
    pub fn from_resolution(resolution: Resolution) -> Self {
        let n = f64::from(resolution);
        Self {
            axis: DVec2::splat((n - 1.0) / 2.0),
            base_radius: n / 2.0,
            height: n,
        }
    }

    /// Radius of the cross-section at height `z`.
    #[inline]
    pub fn radius_at(&self, z: f64) -> f64 {
        self.base_radius * ((self.height - z) / self.height)
    }
}

impl ImplicitShape for Cone {
    fn name(&self) -> &'static str {
        "cone"
    }

    fn contains(&self, point: DVec3) -> bool {
        point.truncate().distance(self.axis) <= self.radius_at(point.z)
    }
}

/// Z-aligned cylinder spanning the whole lattice height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub axis: DVec2,
    pub radius: f64,
}

impl Cylinder {
    pub fn from_resolution(resolution: Resolution) -> Self {
        let n = f64::from(resolution);
        Self {
            axis: DVec2::splat((n - 1.0) / 2.0),
            radius: n / 4.0,
        }
    }
}

impl ImplicitShape for Cylinder {
    fn name(&self) -> &'static str {
        "cylinder"
    }

    // The z extent covers the whole sampled range, so only the radial test matters.
    fn contains(&self, point: DVec3) -> bool {
        point.truncate().distance(self.axis) <= self.radius
    }
}

/// Torus lying in the XY plane.
///
/// Unlike the other shapes it is centred on `resolution / 2`, not on the
/// middle lattice index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    pub center: DVec3,
    /// Distance from the central axis to the middle of the tube
    pub major_radius: f64,
    /// Radius of the tube
    pub minor_radius: f64,
}

impl Torus {
    pub fn from_resolution(resolution: Resolution) -> Self {
        let n = f64::from(resolution);
        Self {
            center: DVec3::splat(n / 2.0),
            major_radius: n / 4.0,
            minor_radius: n / 8.0,
        }
    }
}

impl ImplicitShape for Torus {
    fn name(&self) -> &'static str {
        "torus"
    }

    fn contains(&self, point: DVec3) -> bool {
        let local = point - self.center;
        let distance_xy = local.truncate().length();
        let ring = distance_xy - self.major_radius;
        (ring * ring + local.z * local.z).sqrt() <= self.minor_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_parameters() {
        let sphere = Sphere::from_resolution(10);
        assert_relative_eq!(sphere.center.x, 4.5);
        assert_relative_eq!(sphere.radius, 5.0);
        assert!(sphere.contains(DVec3::splat(5.0)));
        assert!(!sphere.contains(DVec3::ZERO));
    }

    #[test]
    fn sphere_boundary_is_inclusive() {
        let sphere = Sphere::from_resolution(11);
        // center 5.0, radius 5.5
        assert!(sphere.contains(DVec3::new(5.0, 5.0, 10.5)));
        assert!(!sphere.contains(DVec3::new(5.0, 5.0, 10.6)));
    }

    #[test]
    fn cone_narrows_towards_apex() {
        let cone = Cone::from_resolution(20);
        assert_relative_eq!(cone.radius_at(0.0), 10.0);
        assert_relative_eq!(cone.radius_at(10.0), 5.0);
        assert_relative_eq!(cone.radius_at(20.0), 0.0);
        let off_axis = DVec3::new(9.5 + 7.0, 9.5, 0.0);
        assert!(cone.contains(off_axis));
        assert!(!cone.contains(DVec3::new(off_axis.x, off_axis.y, 10.0)));
    }

    #[test]
    fn cylinder_ignores_z() {
        let cylinder = Cylinder::from_resolution(8);
        for z in 0..8 {
            assert!(cylinder.contains(DVec3::new(4.0, 4.0, f64::from(z))));
            assert!(!cylinder.contains(DVec3::new(0.0, 0.0, f64::from(z))));
        }
    }

    #[test]
    fn torus_hole_and_ring() {
        let torus = Torus::from_resolution(16);
        assert!(!torus.contains(DVec3::splat(8.0)));
        assert!(torus.contains(DVec3::new(12.0, 8.0, 8.0)));
        assert!(torus.contains(DVec3::new(8.0, 4.0, 8.0)));
        // tube radius 2 around the ring
        assert!(torus.contains(DVec3::new(12.0, 8.0, 10.0)));
        assert!(!torus.contains(DVec3::new(12.0, 8.0, 11.0)));
    }

    #[test]
    fn names() {
        assert_eq!(Sphere::from_resolution(4).name(), "sphere");
        assert_eq!(Cone::from_resolution(4).name(), "cone");
        assert_eq!(Cylinder::from_resolution(4).name(), "cylinder");
        assert_eq!(Torus::from_resolution(4).name(), "torus");
    }
}
