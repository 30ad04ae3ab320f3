//! Error types shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error;

/// A feature's `coordinates` value could not be read as a coordinate,
/// a coordinate sequence, or a sequence of coordinate sequences.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("feature has no geometry")]
    MissingGeometry,

    #[error("geometry has no coordinates member")]
    MissingCoordinates,

    #[error("expected an array of coordinates, found {0}")]
    NotAnArray(&'static str),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("coordinates are nested deeper than a sequence of sequences")]
    TooDeep,

    #[error("geometry declared as {declared} but coordinates have {found} shape")]
    ShapeMismatch {
        declared: String,
        found: &'static str,
    },
}

/// Errors raised at a stage boundary (read, decode, transform, write).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("could not decode GeoJSON from {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("feature {index}: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
