//! Lattice samplers that turn predicates into occupancy grids.

use glam::{DVec3, Vec3};
use tracing::debug;
use voxelize_core::{Error, GridDims, Result, Triangle};
use voxelize_grid::VoxelGrid;

use crate::implicit::ImplicitShape;
use crate::Resolution;

pub(crate) fn validate_resolution(resolution: Resolution) -> Result<()> {
    if resolution == 0 {
        return Err(Error::invalid("resolution must be a positive integer"));
    }
    Ok(())
}

/// Fill a `resolution³` grid by evaluating `shape` at each integer index.
pub fn sample_implicit<S: ImplicitShape + ?Sized>(
    shape: &S,
    resolution: Resolution,
) -> Result<VoxelGrid> {
    validate_resolution(resolution)?;
    let dims = GridDims::cubic(resolution as usize)?;

    let grid = VoxelGrid::filled_with(dims, |pos| {
        shape.contains(DVec3::new(pos.x as f64, pos.y as f64, pos.z as f64))
    });

    debug!(
        shape = shape.name(),
        resolution,
        filled = grid.filled_count(),
        "Sampled implicit shape"
    );
    Ok(grid)
}

/// Grid dimensions covering `extent` at `resolution` samples per unit.
fn triangle_dims(extent: Vec3, resolution: Resolution) -> Result<GridDims> {
    let scaled = extent * resolution as f32;
    let [x, y, z] = scaled.to_array().map(|axis| axis.floor() as usize);
    if x == 0 || y == 0 || z == 0 {
        return Err(Error::invalid(format!(
            "triangle bounding box {extent} at resolution {resolution} yields an empty \
             {x}x{y}x{z} grid; every axis needs extent * resolution >= 1"
        )));
    }
    GridDims::new(x, y, z)
}

/// Fill a grid spanning the triangle's bounding box, testing each voxel centre.
///
/// Each axis holds `floor(extent * resolution)` voxels; the voxel at index
/// `i` is sampled at `min + (i + 0.5) / resolution`.
pub fn sample_triangle(triangle: &Triangle, resolution: Resolution) -> Result<VoxelGrid> {
    validate_resolution(resolution)?;
    let aabb = triangle.aabb();
    let dims = triangle_dims(aabb.size(), resolution)?;

    let step = resolution as f32;
    let grid = VoxelGrid::filled_with(dims, |pos| {
        let index = Vec3::new(pos.x as f32, pos.y as f32, pos.z as f32);
        let center = aabb.min + (index + 0.5) / step;
        triangle.contains_projected(center)
    });

    debug!(
        resolution,
        dims = ?dims.to_array(),
        filled = grid.filled_count(),
        "Sampled triangle"
    );
    Ok(grid)
}
