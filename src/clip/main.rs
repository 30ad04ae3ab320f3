//! Clip a raw street dataset to the configured bounding box.
//!
//! Only LineStrings that lie fully inside the box are kept.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sidewalkgen::stages::run_region;
use sidewalkgen::{Config, MalformedPolicy, Stage};

#[derive(Parser, Debug)]
#[command(name = "clip-region")]
#[command(about = "Keep street LineStrings that lie inside a bounding box")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raw street GeoJSON
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the clipped collection
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Southern edge of the box
    #[arg(long, allow_hyphen_values = true)]
    min_lat: Option<f64>,

    /// Northern edge of the box
    #[arg(long, allow_hyphen_values = true)]
    max_lat: Option<f64>,

    /// Western edge of the box
    #[arg(long, allow_hyphen_values = true)]
    min_lon: Option<f64>,

    /// Eastern edge of the box
    #[arg(long, allow_hyphen_values = true)]
    max_lon: Option<f64>,

    /// How to treat LineStrings with unreadable coordinates
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
    if let Some(v) = args.min_lat {
        config.bbox.min_lat = v;
    }
    if let Some(v) = args.max_lat {
        config.bbox.max_lat = v;
    }
    if let Some(v) = args.min_lon {
        config.bbox.min_lon = v;
    }
    if let Some(v) = args.max_lon {
        config.bbox.max_lon = v;
    }
    if let Some(policy) = args.on_malformed {
        config.on_malformed = policy;
    }
    config.validate()?;

    let (input, output) = config.resolve_paths(Stage::Region, args.input, args.output);

    info!("Region filter");
    info!(
        "Box: lat [{}, {}], lon [{}, {}]",
        config.bbox.min_lat, config.bbox.max_lat, config.bbox.min_lon, config.bbox.max_lon
    );

    run_region(&config, &input, &output)
        .with_context(|| format!("Region filter failed for '{}'", input.display()))?;

    Ok(())
}
