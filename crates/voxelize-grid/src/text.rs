//! Human-readable slice dump.

use std::fmt;

use voxelize_core::GridPos;

use crate::grid::VoxelGrid;

impl VoxelGrid {
    /// Render every z-slice as a labelled 2D block.
    ///
    /// Rows vary over x and columns over y. Each value is followed by a
    /// single space, and slices are separated by a blank line.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VoxelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims();
        let cells = self.cells();
        for z in 0..dims.z() {
            writeln!(f, "z = {z}")?;
            for x in 0..dims.x() {
                for y in 0..dims.y() {
                    write!(f, "{} ", cells[dims.to_index(GridPos::new(x, y, z))])?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use voxelize_core::GridDims;

    use super::*;

    #[test]
    fn slices_rows_and_columns() {
        let dims = GridDims::new(2, 3, 2).unwrap();
        // filled at z = 0 on the diagonal x == y, everywhere at z = 1 for x = 1
        let grid = VoxelGrid::filled_with(dims, |p| {
            if p.z == 0 {
                p.x == p.y
            } else {
                p.x == 1
            }
        });
        let expected = "z = 0\n1 0 0 \n0 1 0 \n\nz = 1\n0 0 0 \n1 1 1 \n\n";
        assert_eq!(grid.to_text(), expected);
    }

    #[test]
    fn display_matches_to_text() {
        let grid = VoxelGrid::filled_with(GridDims::cubic(2).unwrap(), |p| p.z == 1);
        assert_eq!(format!("{grid}"), grid.to_text());
    }
}
