//! Run region clip, attribute filter and sidewalk generation in one pass.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sidewalkgen::stages::run_pipeline;
use sidewalkgen::{Config, MalformedPolicy, Stage};

#[derive(Parser, Debug)]
#[command(name = "pipeline")]
#[command(about = "Raw streets to sidewalk points in one run")]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raw street GeoJSON
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the sidewalk points
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the clipped and filtered collections into this directory
    #[arg(long)]
    intermediate_dir: Option<PathBuf>,

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
    if let Some(policy) = args.on_malformed {
        config.on_malformed = policy;
    }

    let (input, output) = config.resolve_paths(Stage::Pipeline, args.input, args.output);

    info!("Sidewalk pipeline");
    info!("File: {}", input.display());

    if let Some(dir) = &args.intermediate_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    run_pipeline(&config, &input, &output, args.intermediate_dir.as_deref())
        .with_context(|| format!("Pipeline failed for '{}'", input.display()))?;

    Ok(())
}
