//! Structured (JSON) form of a voxel grid.
//!
//! The record has a single field, `value`, holding the nested
//! `value[x][y][z]` occupancy array.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use voxelize_core::{Error, GridDims, Result};

use crate::grid::VoxelGrid;

/// Structured record mirroring the on-disk layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelRecord {
    /// Occupancy values indexed as `value[x][y][z]`
    pub value: Vec<Vec<Vec<u8>>>,
}

impl From<VoxelGrid> for VoxelRecord {
    fn from(grid: VoxelGrid) -> Self {
        Self {
            value: grid.to_nested(),
        }
    }
}

impl TryFrom<VoxelRecord> for VoxelGrid {
    type Error = Error;

    fn try_from(record: VoxelRecord) -> Result<Self> {
        let size_x = record.value.len();
        let size_y = record.value.first().map_or(0, Vec::len);
        let size_z = record
            .value
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);
        let dims = GridDims::new(size_x, size_y, size_z)?;

        let mut cells = Vec::with_capacity(dims.volume());
        for (x, plane) in record.value.into_iter().enumerate() {
            if plane.len() != size_y {
                return Err(Error::invalid(format!(
                    "ragged record: value[{x}] has {} rows, expected {size_y}",
                    plane.len()
                )));
            }
            for (y, row) in plane.into_iter().enumerate() {
                if row.len() != size_z {
                    return Err(Error::invalid(format!(
                        "ragged record: value[{x}][{y}] has {} cells, expected {size_z}",
                        row.len()
                    )));
                }
                cells.extend(row);
            }
        }
        Self::from_cells(dims, cells)
    }
}

impl VoxelGrid {
    /// Structured record holding a copy of the occupancy array.
    pub fn to_structured(&self) -> VoxelRecord {
        VoxelRecord {
            value: self.to_nested(),
        }
    }

    /// Rebuild a grid from its structured record.
    pub fn from_structured(record: VoxelRecord) -> Result<Self> {
        Self::try_from(record)
    }

    /// Compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parse a grid from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Write the pretty-printed record to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(json_error)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        let dims = self.dims();
        info!(
            path = %path.display(),
            dims = ?dims.to_array(),
            "Wrote voxel grid"
        );
        Ok(())
    }

    /// Read a grid previously written with [`VoxelGrid::write_json`].
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let grid: Self = serde_json::from_reader(reader).map_err(json_error)?;
        debug!(path = %path.display(), filled = grid.filled_count(), "Read voxel grid");
        Ok(grid)
    }
}

/// I/O failures inside serde_json stay I/O errors.
fn json_error(err: serde_json::Error) -> Error {
    if err.is_io() {
        Error::Io(err.into())
    } else {
        Error::Serialization(err.to_string())
    }
}
