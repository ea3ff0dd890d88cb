//! Command-line configuration.

use std::path::PathBuf;

use voxelize_core::{Error, Result};
use voxelize_shapes::{Resolution, ShapeKind};

/// Resolution used when `--resolution` is not given.
pub const DEFAULT_RESOLUTION: Resolution = 20;

/// Settings for a single voxelization run.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Shape to generate.
    pub shape: ShapeKind,
    /// Lattice size (implicit shapes) or samples per unit (triangle).
    pub resolution: Resolution,
    /// Where the pretty-printed JSON record is written.
    pub output: PathBuf,
    /// Triangle vertices, required for the triangle shape.
    pub vertices: Option<[[f32; 3]; 3]>,
    /// Also print the slice dump to stdout.
    pub print: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Cone,
            resolution: DEFAULT_RESOLUTION,
            output: default_output(ShapeKind::Cone),
            vertices: None,
            print: false,
        }
    }
}

fn default_output(shape: ShapeKind) -> PathBuf {
    PathBuf::from(format!("./{shape}.json"))
}

impl CliConfig {
    /// Parse from command line arguments.
    pub fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse_args(&args)
    }

    /// Parse from a slice of arguments (the first entry is the program name).
    ///
    /// Recognizes the following flags:
    /// - `-s` or `--shape <NAME>`
    /// - `-r` or `--resolution <N>`
    /// - `-o` or `--output <PATH>`
    /// - `-v` or `--vertices <x,y,z;x,y,z;x,y,z>`
    /// - `-p` or `--print`
    pub fn parse_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut output = None;

        let mut rest = args.iter().skip(1);
        while let Some(arg) = rest.next() {
            let mut value = || {
                rest.next()
                    .ok_or_else(|| Error::invalid(format!("{arg} expects a value")))
            };
            match arg.as_str() {
                "-s" | "--shape" => config.shape = value()?.parse()?,
                "-r" | "--resolution" => config.resolution = parse_resolution(value()?)?,
                "-o" | "--output" => output = Some(PathBuf::from(value()?)),
                "-v" | "--vertices" => config.vertices = Some(parse_vertices(value()?)?),
                "-p" | "--print" => config.print = true,
                other => return Err(Error::invalid(format!("unknown argument '{other}'"))),
            }
        }

        config.output = output.unwrap_or_else(|| default_output(config.shape));
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match (self.shape.needs_vertices(), self.vertices.is_some()) {
            (true, false) => Err(Error::invalid("--shape triangle requires --vertices")),
            (false, true) => Err(Error::invalid(format!(
                "--vertices only applies to triangle, not {}",
                self.shape
            ))),
            _ => Ok(()),
        }
    }
}

fn parse_resolution(text: &str) -> Result<Resolution> {
    let resolution: Resolution = text
        .parse()
        .map_err(|_| Error::invalid(format!("resolution '{text}' is not a positive integer")))?;
    if resolution == 0 {
        return Err(Error::invalid("resolution must be a positive integer"));
    }
    Ok(resolution)
}

/// Parse vertices from a string like "0,0,0;1,0,0;0,1,1".
fn parse_vertices(text: &str) -> Result<[[f32; 3]; 3]> {
    let malformed = || {
        Error::invalid(format!(
            "vertices '{text}' must look like x,y,z;x,y,z;x,y,z"
        ))
    };

    let points = text
        .split(';')
        .map(|point| {
            let coords = point
                .split(',')
                .map(|c| c.trim().parse::<f32>().map_err(|_| malformed()))
                .collect::<Result<Vec<_>>>()?;
            <[f32; 3]>::try_from(coords).map_err(|_| malformed())
        })
        .collect::<Result<Vec<_>>>()?;
    <[[f32; 3]; 3]>::try_from(points).map_err(|_| malformed())
}

/// Print the usage text.
pub fn print_help() {
    eprintln!(
        "Voxelize parametric shapes into dense occupancy grids

USAGE:
    voxelize [OPTIONS]

OPTIONS:
    -s, --shape <NAME>         sphere, cone, cylinder, torus or triangle (default: cone)
    -r, --resolution <N>       Grid size for solids, samples per unit for triangle
                               (default: {DEFAULT_RESOLUTION})
    -o, --output <PATH>        JSON output path (default: ./<shape>.json)
    -v, --vertices <VERTICES>  Triangle vertices as \"x,y,z;x,y,z;x,y,z\"
    -p, --print                Also print each z-slice to stdout
    -h, --help                 Print this help message

EXAMPLES:
    voxelize --shape torus --resolution 32 --output torus.json
    voxelize -s triangle -r 8 -v \"0,0,0;1,0,0;0,1,1\" -p

ENVIRONMENT VARIABLES:
    RUST_LOG                   Set log level (e.g., info, debug, trace)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("voxelize")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults() {
        let config = CliConfig::parse_args(&args(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, PathBuf::from("./cone.json"));
        assert_eq!(config.resolution, 20);
    }

    #[test]
    fn output_follows_shape() {
        let config = CliConfig::parse_args(&args(&["--shape", "torus"])).unwrap();
        assert_eq!(config.shape, ShapeKind::Torus);
        assert_eq!(config.output, PathBuf::from("./torus.json"));
    }

    #[test]
    fn all_flags() {
        let config = CliConfig::parse_args(&args(&[
            "-s",
            "triangle",
            "-r",
            "8",
            "-o",
            "out/tri.json",
            "-v",
            "0,0,0; 1,0,0; 0,1,1.5",
            "-p",
        ]))
        .unwrap();
        assert_eq!(config.shape, ShapeKind::Triangle);
        assert_eq!(config.resolution, 8);
        assert_eq!(config.output, PathBuf::from("out/tri.json"));
        assert_eq!(
            config.vertices,
            Some([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 1.5]])
        );
        assert!(config.print);
    }

    #[test]
    fn bad_resolution() {
        assert!(CliConfig::parse_args(&args(&["-r", "0"])).is_err());
        assert!(CliConfig::parse_args(&args(&["-r", "-3"])).is_err());
        assert!(CliConfig::parse_args(&args(&["-r", "ten"])).is_err());
    }

    #[test]
    fn missing_value() {
        assert!(matches!(
            CliConfig::parse_args(&args(&["--output"])),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn unknown_flag() {
        assert!(CliConfig::parse_args(&args(&["--seed", "42"])).is_err());
    }

    #[test]
    fn vertices_must_match_shape() {
        assert!(CliConfig::parse_args(&args(&["-s", "triangle"])).is_err());
        assert!(CliConfig::parse_args(&args(&["-v", "0,0,0;1,0,0;0,1,0"])).is_err());
    }

    #[test]
    fn malformed_vertices() {
        assert!(parse_vertices("0,0,0;1,0,0").is_err());
        assert!(parse_vertices("0,0;1,0,0;0,1,0").is_err());
        assert!(parse_vertices("0,0,0;1,0,0;0,1,x").is_err());
    }
}
