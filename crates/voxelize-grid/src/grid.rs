//! Dense occupancy grid.
//!
//! A [`VoxelGrid`] is created fully populated and is read-only afterwards.

use serde::{Deserialize, Serialize};
use voxelize_core::constants::{EMPTY, FILLED};
use voxelize_core::{Error, GridDims, GridPos, Result};

use crate::record::VoxelRecord;

/// Dense 3D array of 0/1 occupancy values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "VoxelRecord", try_from = "VoxelRecord")]
pub struct VoxelGrid {
    dims: GridDims,
    cells: Vec<u8>,
}

impl VoxelGrid {
    /// Build a grid by evaluating `inside` once per cell, in storage order.
    pub fn filled_with(dims: GridDims, mut inside: impl FnMut(GridPos) -> bool) -> Self {
        let cells = dims
            .iter()
            .map(|pos| if inside(pos) { FILLED } else { EMPTY })
            .collect();
        Self { dims, cells }
    }

    /// Wrap existing cell values laid out as described on [`GridDims`].
    pub fn from_cells(dims: GridDims, cells: Vec<u8>) -> Result<Self> {
        if cells.len() != dims.volume() {
            return Err(Error::invalid(format!(
                "grid {}x{}x{} needs {} cells, got {}",
                dims.x(),
                dims.y(),
                dims.z(),
                dims.volume(),
                cells.len()
            )));
        }
        if let Some(index) = cells.iter().position(|&c| c != EMPTY && c != FILLED) {
            let pos = dims.from_index(index);
            return Err(Error::invalid(format!(
                "cell ({}, {}, {}) holds {}, expected 0 or 1",
                pos.x, pos.y, pos.z, cells[index]
            )));
        }
        Ok(Self { dims, cells })
    }

    /// Grid dimensions
    #[inline]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Raw cell values in storage order
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Get the value at a position, or `None` when out of range.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        let pos = GridPos::new(x, y, z);
        self.dims
            .contains(pos)
            .then(|| self.cells[self.dims.to_index(pos)])
    }

    /// True if the cell exists and is filled.
    #[inline]
    pub fn is_filled(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z) == Some(FILLED)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == FILLED).count()
    }

    /// Check if no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Copy the cells into a nested `value[x][y][z]` array.
    pub fn to_nested(&self) -> Vec<Vec<Vec<u8>>> {
        self.cells
            .chunks_exact(self.dims.y() * self.dims.z())
            .map(|plane| plane.chunks_exact(self.dims.z()).map(<[u8]>::to_vec).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_with_visits_every_cell() {
        let dims = GridDims::new(2, 3, 4).unwrap();
        let mut visits = 0;
        let grid = VoxelGrid::filled_with(dims, |pos| {
            visits += 1;
            pos.x == 1
        });
        assert_eq!(visits, 24);
        assert_eq!(grid.filled_count(), 12);
        assert!(grid.is_filled(1, 2, 3));
        assert!(!grid.is_filled(0, 2, 3));
    }

    #[test]
    fn get_out_of_range() {
        let grid = VoxelGrid::filled_with(GridDims::cubic(2).unwrap(), |_| true);
        assert_eq!(grid.get(1, 1, 1), Some(FILLED));
        assert_eq!(grid.get(2, 0, 0), None);
        assert!(!grid.is_filled(0, 0, 5));
    }

    #[test]
    fn from_cells_checks_length() {
        let dims = GridDims::cubic(2).unwrap();
        assert!(matches!(
            VoxelGrid::from_cells(dims, vec![0; 7]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_axis_never_reaches_a_grid() {
        let result = GridDims::new(2, 0, 3).and_then(|dims| VoxelGrid::from_cells(dims, vec![]));
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn single_cell_grid_serializes() {
        let dims = GridDims::new(1, 1, 1).unwrap();
        let grid = VoxelGrid::from_cells(dims, vec![1]).unwrap();
        assert_eq!(grid.to_nested(), vec![vec![vec![1]]]);
    }

    #[test]
    fn from_cells_checks_values() {
        let dims = GridDims::new(1, 1, 2).unwrap();
        assert!(VoxelGrid::from_cells(dims, vec![0, 2]).is_err());
        assert!(VoxelGrid::from_cells(dims, vec![0, 1]).is_ok());
    }

    #[test]
    fn nested_layout_matches_get() {
        let dims = GridDims::new(2, 3, 4).unwrap();
        let grid = VoxelGrid::filled_with(dims, |p| (p.x + 2 * p.y + p.z) % 3 == 0);
        let nested = grid.to_nested();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].len(), 3);
        assert_eq!(nested[0][0].len(), 4);
        for pos in dims.iter() {
            assert_eq!(Some(nested[pos.x][pos.y][pos.z]), grid.get(pos.x, pos.y, pos.z));
        }
    }

    #[test]
    fn empty_grid() {
        let grid = VoxelGrid::filled_with(GridDims::cubic(3).unwrap(), |_| false);
        assert!(grid.is_empty());
        assert_eq!(grid.filled_count(), 0);
    }
}
