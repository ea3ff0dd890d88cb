//! Lattice coordinates for dense voxel grids.

use crate::error::{Error, Result};

/// Position of a single cell in a grid (zero-based per axis).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridPos {
    /// Create a new grid position
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Extent of a grid along each axis.
///
/// Cells are laid out x-major with z varying fastest, which matches the
/// nested `value[x][y][z]` layout of the structured form. Every axis is at
/// least 1; the only way to build one is [`GridDims::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    x: usize,
    y: usize,
    z: usize,
}

impl GridDims {
    /// Create new dimensions, rejecting any zero-length axis.
    pub fn new(x: usize, y: usize, z: usize) -> Result<Self> {
        if x == 0 || y == 0 || z == 0 {
            return Err(Error::invalid(format!(
                "grid dimensions must be >= 1 on every axis (got {x}x{y}x{z})"
            )));
        }
        x.checked_mul(y)
            .and_then(|xy| xy.checked_mul(z))
            .ok_or_else(|| Error::invalid(format!("grid {x}x{y}x{z} overflows usize")))?;
        Ok(Self { x, y, z })
    }

    /// Dimensions of an `n x n x n` cube.
    pub fn cubic(n: usize) -> Result<Self> {
        Self::new(n, n, n)
    }

    /// Cells along x
    #[inline]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Cells along y
    #[inline]
    pub const fn y(self) -> usize {
        self.y
    }

    /// Cells along z
    #[inline]
    pub const fn z(self) -> usize {
        self.z
    }

    /// Total number of cells
    #[inline]
    pub const fn volume(self) -> usize {
        self.x * self.y * self.z
    }

    /// Check if a position lies inside the grid
    #[inline]
    pub const fn contains(self, pos: GridPos) -> bool {
        pos.x < self.x && pos.y < self.y && pos.z < self.z
    }

    /// Convert to linear index for flat array storage
    #[inline]
    pub const fn to_index(self, pos: GridPos) -> usize {
        (pos.x * self.y + pos.y) * self.z + pos.z
    }

    /// Create from linear index
    #[inline]
    pub const fn from_index(self, index: usize) -> GridPos {
        let z = index % self.z;
        let y = (index / self.z) % self.y;
        let x = index / (self.y * self.z);
        GridPos { x, y, z }
    }

    /// Iterate every position in storage order.
    pub fn iter(self) -> impl Iterator<Item = GridPos> {
        (0..self.volume()).map(move |index| self.from_index(index))
    }

    /// Dimensions as an `[x, y, z]` array
    #[inline]
    pub const fn to_array(self) -> [usize; 3] {
        [self.x, self.y, self.z]
    }
}
