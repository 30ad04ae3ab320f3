use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by every stage. Any field may be omitted from the
/// TOML file; command-line flags override whatever is loaded here.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub bbox: BboxConfig,
    pub target_name: String,
    pub name_key: String,
    pub status_key: String,
    pub status_sentinel: f64,
    pub classification_key: String,
    pub minor_arterial_offset: f64,
    pub default_offset: f64,
    pub on_malformed: MalformedPolicy,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BboxConfig {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// What a stage does with a feature whose coordinates cannot be read
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the stage; no output is written
    #[default]
    Abort,
    /// Drop the feature, log a warning and carry on
    Skip,
}

impl Default for BboxConfig {
    fn default() -> Self {
        // Schaumburg, IL
        Self {
            min_lat: 41.98247,
            max_lat: 42.08164,
            min_lon: -88.15758,
            max_lon: -88.02550,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            bbox: BboxConfig::default(),
            target_name: "Schaumburg".to_string(),
            name_key: "name".to_string(),
            status_key: "STATUS".to_string(),
            status_sentinel: 0.0,
            classification_key: "FC_STATUS".to_string(),
            minor_arterial_offset: 0.000121,
            default_offset: 0.000039,
            on_malformed: MalformedPolicy::Abort,
        }
    }
}

/// Pipeline stages, used to pick default file names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Region,
    Attribute,
    Sidewalks,
    Pipeline,
}

impl Stage {
    fn default_paths(self) -> (&'static str, &'static str) {
        match self {
            Stage::Region => ("mapData.geojson", "filtered.geojson"),
            Stage::Attribute => ("mapData.geoJSON", "filtered_streets_data.geojson"),
            Stage::Sidewalks => ("filtered_streets_data.geojson", "mapData.geoJSON"),
            Stage::Pipeline => ("streets.geojson", "sidewalks.geojson"),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.bbox.min_lat <= self.bbox.max_lat,
            "bbox.min_lat ({}) is greater than bbox.max_lat ({})",
            self.bbox.min_lat,
            self.bbox.max_lat
        );
        ensure!(
            self.bbox.min_lon <= self.bbox.max_lon,
            "bbox.min_lon ({}) is greater than bbox.max_lon ({})",
            self.bbox.min_lon,
            self.bbox.max_lon
        );
        ensure!(
            self.minor_arterial_offset.is_finite() && self.default_offset.is_finite(),
            "offsets must be finite numbers"
        );
        Ok(())
    }

    /// Resolve input and output paths: explicit flag, then config, then the
    /// stage's default file name.
    pub fn resolve_paths(
        &self,
        stage: Stage,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> (PathBuf, PathBuf) {
        let (default_input, default_output) = stage.default_paths();
        let input = input
            .or_else(|| self.input_path.clone())
            .unwrap_or_else(|| PathBuf::from(default_input));
        let output = output
            .or_else(|| self.output_path.clone())
            .unwrap_or_else(|| PathBuf::from(default_output));
        (input, output)
    }
}
