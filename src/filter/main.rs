//! Keep features for one municipality, dropping sentinel-status rows.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sidewalkgen::stages::run_attribute;
use sidewalkgen::{Config, Stage};

#[derive(Parser, Debug)]
#[command(name = "filter-attributes")]
#[command(about = "Filter street features by name and status")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Street GeoJSON to filter
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the filtered collection
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Value the name property must equal
    #[arg(long)]
    target_name: Option<String>,

    /// Status value marking features to drop
    #[arg(long, allow_hyphen_values = true)]
    status_sentinel: Option<f64>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(name) = args.target_name {
        config.target_name = name;
    }
    if let Some(sentinel) = args.status_sentinel {
        config.status_sentinel = sentinel;
    }

    let (input, output) = config.resolve_paths(Stage::Attribute, args.input, args.output);

    info!("Attribute filter");
    info!(
        "Keeping {} == '{}' where {} != {}",
        config.name_key, config.target_name, config.status_key, config.status_sentinel
    );

    run_attribute(&config, &input, &output)
        .with_context(|| format!("Filtering skipped for '{}'", input.display()))?;

    Ok(())
}
