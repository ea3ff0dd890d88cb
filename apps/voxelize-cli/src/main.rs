//! Voxelize command-line entry point
//!
//! Generates one shape and writes its occupancy grid as pretty-printed JSON.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p voxelize-cli -- [OPTIONS]
//! ```
//!
//! Run with `--help` for the full option list. Logging is controlled through
//! `RUST_LOG` (e.g. `RUST_LOG=debug`).

mod config;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxelize_shapes::voxelize_shape;

use crate::config::{print_help, CliConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Check for help flag before parsing anything else
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    let config = CliConfig::from_args().context("invalid arguments (see --help)")?;
    run(&config)
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    info!(
        shape = %config.shape,
        resolution = config.resolution,
        "Voxelizing"
    );

    let grid = voxelize_shape(config.shape, config.resolution, config.vertices)
        .with_context(|| format!("failed to voxelize {}", config.shape))?;

    if config.print {
        print!("{grid}");
    }

    grid.write_json(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    let dims = grid.dims();
    info!(
        dims = ?dims.to_array(),
        filled = grid.filled_count(),
        total = dims.volume(),
        output = %config.output.display(),
        "Done"
    );
    Ok(())
}
