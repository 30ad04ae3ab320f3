//! Sidewalkgen - approximate sidewalk points from a street centerline dataset
//!
//! This library provides the shared types and stages for the `clip-region`,
//! `filter-attributes`, `generate-sidewalks` and `pipeline` binaries.

pub mod config;
pub mod error;
pub mod filters;
pub mod io;
pub mod models;
pub mod sidewalk;
pub mod stages;

pub use config::{Config, MalformedPolicy, Stage};
pub use error::{GeometryError, PipelineError};
pub use models::{CoordinateShape, Feature, FeatureCollection};
