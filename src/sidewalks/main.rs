//! Generate sidewalk points from a filtered street collection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sidewalkgen::stages::run_sidewalks;
use sidewalkgen::{Config, MalformedPolicy, Stage};

#[derive(Parser, Debug)]
#[command(name = "generate-sidewalks")]
#[command(about = "Offset street vertices into sidewalk points")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filtered street GeoJSON
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the sidewalk points
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Offset for "Minor Arterial" roads, in degrees of longitude
    #[arg(long)]
    minor_arterial_offset: Option<f64>,

    /// Offset for every other road, in degrees of longitude
    #[arg(long)]
    default_offset: Option<f64>,

    /// How to treat features with unreadable coordinates
    #[arg(long, value_enum)]
    on_malformed: Option<MalformedPolicy>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(offset) = args.minor_arterial_offset {
        config.minor_arterial_offset = offset;
    }
    if let Some(offset) = args.default_offset {
        config.default_offset = offset;
    }
    if let Some(policy) = args.on_malformed {
        config.on_malformed = policy;
    }
    config.validate()?;

    let (input, output) = config.resolve_paths(Stage::Sidewalks, args.input, args.output);

    info!("Sidewalk generator");
    info!("File: {}", input.display());

    run_sidewalks(&config, &input, &output)
        .with_context(|| format!("Sidewalk generation failed for '{}'", input.display()))?;

    Ok(())
}
