//! Stage runners: read, transform, write.
//!
//! Each runner is its own failure domain. Nothing is written unless the
//! whole stage succeeds, and each stage summary is logged here, once.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::filters::{AttributeFilter, FilterSummary, RegionFilter};
use crate::io::{read_collection, write_collection, StagedWrite};
use crate::models::FeatureCollection;
use crate::sidewalk::{SidewalkGenerator, SidewalkStats};

pub fn clip_region(
    config: &Config,
    streets: FeatureCollection,
) -> Result<(FeatureCollection, FilterSummary)> {
    RegionFilter::new(&config.bbox, config.on_malformed).apply(streets)
}

pub fn filter_attributes(
    config: &Config,
    streets: FeatureCollection,
) -> (FeatureCollection, FilterSummary) {
    AttributeFilter::from_config(config).apply(streets)
}

pub fn generate_sidewalks(
    config: &Config,
    streets: &FeatureCollection,
) -> Result<(FeatureCollection, SidewalkStats)> {
    SidewalkGenerator::from_config(config).generate(streets)
}

fn log_attribute_summary(summary: &FilterSummary) {
    info!("--- Filtering Summary ---");
    info!("Initial number of features: {}", summary.initial);
    info!("Number of features deleted: {}", summary.removed());
    info!("Remaining features: {}", summary.kept);
}

fn log_sidewalk_stats(stats: &SidewalkStats) {
    info!(
        "Generated {} sidewalk points from {} coordinates ({} features, {} skipped)",
        stats.points, stats.coordinates, stats.features, stats.skipped
    );
}

pub fn run_region(config: &Config, input: &Path, output: &Path) -> Result<FilterSummary> {
    let streets = read_collection(input)?;
    let (clipped, summary) = clip_region(config, streets)?;
    write_collection(output, &clipped)?;
    info!("Saved {} LineStrings to '{}'", summary.kept, output.display());
    if summary.malformed > 0 {
        info!("Skipped {} malformed LineStrings", summary.malformed);
    }
    Ok(summary)
}

pub fn run_attribute(config: &Config, input: &Path, output: &Path) -> Result<FilterSummary> {
    let streets = read_collection(input)?;
    let (filtered, summary) = filter_attributes(config, streets);
    write_collection(output, &filtered)?;
    log_attribute_summary(&summary);
    info!(
        "Filtered GeoJSON data successfully saved to '{}'",
        output.display()
    );
    Ok(summary)
}

pub fn run_sidewalks(config: &Config, input: &Path, output: &Path) -> Result<SidewalkStats> {
    let streets = read_collection(input)?;
    let (points, stats) = generate_sidewalks(config, &streets)?;
    write_collection(output, &points)?;
    log_sidewalk_stats(&stats);
    info!("{} has been created with sidewalk points", output.display());
    Ok(stats)
}

/// Counts from a full in-process run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub region: FilterSummary,
    pub attribute: FilterSummary,
    pub sidewalks: SidewalkStats,
}

/// Run all three stages in memory. When `intermediate_dir` is set the
/// clipped and filtered collections are written there as well.
///
/// Every output is staged to a temporary file first and only renamed into
/// place once all of them were written, so a failed write leaves none of
/// them behind. The directory must already exist.
pub fn run_pipeline(
    config: &Config,
    input: &Path,
    output: &Path,
    intermediate_dir: Option<&Path>,
) -> Result<PipelineReport> {
    let streets = read_collection(input)?;

    let (clipped, region) = clip_region(config, streets)?;
    let (filtered, attribute) = filter_attributes(config, clipped.clone());
    let (points, sidewalks) = generate_sidewalks(config, &filtered)?;

    let mut staged = vec![StagedWrite::new(output, &points)?];
    if let Some(dir) = intermediate_dir {
        staged.push(StagedWrite::new(&dir.join("filtered.geojson"), &clipped)?);
        staged.push(StagedWrite::new(
            &dir.join("filtered_streets_data.geojson"),
            &filtered,
        )?);
    }
    for write in staged {
        write.commit()?;
    }

    info!("Region filter: {}", region);
    info!("Attribute filter: {}", attribute);
    log_sidewalk_stats(&sidewalks);
    if let Some(dir) = intermediate_dir {
        info!("Wrote intermediate collections to '{}'", dir.display());
    }
    info!("{} has been created with sidewalk points", output.display());

    Ok(PipelineReport {
        region,
        attribute,
        sidewalks,
    })
}
