//! Reading and writing GeoJSON collections at stage boundaries.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::models::FeatureCollection;

/// Read a FeatureCollection from a UTF-8 GeoJSON file.
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    if !path.exists() {
        return Err(PipelineError::MissingInput(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| PipelineError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        "Loaded {} features from '{}'",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

/// Serialize a collection to the exact bytes written to disk:
/// pretty-printed (2-space indent) with a trailing newline.
pub fn to_pretty_string(collection: &FeatureCollection) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(collection)?;
    text.push('\n');
    Ok(text)
}

/// A fully written temporary file waiting to be renamed over its destination.
///
/// Dropping it without calling `commit` deletes the temporary file.
pub struct StagedWrite {
    tmp: NamedTempFile,
    path: PathBuf,
    features: usize,
}

impl StagedWrite {
    /// Write `collection` to a temporary file next to `path`.
    pub fn new(path: &Path, collection: &FeatureCollection) -> Result<Self> {
        let write_err = |source: std::io::Error| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let text = to_pretty_string(collection).map_err(|e| write_err(e.into()))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(text.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;

        Ok(Self {
            tmp,
            path: path.to_path_buf(),
            features: collection.len(),
        })
    }

    /// Rename the temporary file into place.
    pub fn commit(self) -> Result<()> {
        let Self {
            tmp,
            path,
            features,
        } = self;
        tmp.persist(&path).map_err(|e| PipelineError::Write {
            path: path.clone(),
            source: e.error,
        })?;

        debug!("Persisted {} features to '{}'", features, path.display());
        Ok(())
    }
}

/// Write a collection as pretty-printed GeoJSON.
///
/// The document is written to a temporary file next to `path` and renamed
/// into place, so a failure never leaves a partial output behind.
pub fn write_collection(path: &Path, collection: &FeatureCollection) -> Result<()> {
    StagedWrite::new(path, collection)?.commit()
}
