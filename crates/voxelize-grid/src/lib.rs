//! Dense voxel occupancy grids for the voxelize toolkit.

pub mod grid;
pub mod record;
pub mod text;

pub use grid::VoxelGrid;
pub use record::VoxelRecord;
