//! Encode command handler
//!
//! Turns the parsed LON/LAT pair into a grid locator and writes it out.

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::format::{get_formatter, EncodeReport};
use crate::locator;
use clap::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Encode command arguments
#[derive(Args)]
pub struct EncodeArgs {
    /// Longitude in decimal degrees, east positive
    #[arg(value_name = "LON", allow_negative_numbers = true)]
    pub lon: f64,

    /// Latitude in decimal degrees, north positive
    #[arg(value_name = "LAT", allow_negative_numbers = true)]
    pub lat: f64,

    /// Reject coordinates outside [-180, 180] / [-90, 90]
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the encode command
pub fn run(args: EncodeArgs) -> Result<()> {
    // Initialize logging; logs go to stderr so stdout carries only the
    // formatted result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let coords = Coordinates::new(args.lat, args.lon);

    let grid = if args.strict {
        locator::encode_checked(coords)?
    } else {
        locator::encode(coords)
    };

    debug!("encoded ({}, {}) as {}", coords.lng, coords.lat, grid);

    // Format output
    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::InvalidInput(format!("Unknown format: {}", args.format)))?;
    let output = formatter.format(&EncodeReport::new(coords, grid))?;

    // Write output
    if let Some(path) = args.output {
        std::fs::write(&path, format!("{}\n", output))?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
