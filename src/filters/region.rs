//! Clip a street collection to a bounding rectangle.

use geo::{coord, Intersects, Rect};
use tracing::{debug, warn};

use super::FilterSummary;
use crate::config::{BboxConfig, MalformedPolicy};
use crate::error::{GeometryError, PipelineError, Result};
use crate::models::{CoordinateShape, FeatureCollection};

/// Keeps LineStrings that lie entirely inside a closed rectangle
#[derive(Debug, Clone)]
pub struct RegionFilter {
    rect: Rect<f64>,
    on_malformed: MalformedPolicy,
}

impl RegionFilter {
    pub fn new(bbox: &BboxConfig, on_malformed: MalformedPolicy) -> Self {
        Self {
            rect: Rect::new(
                coord! { x: bbox.min_lon, y: bbox.min_lat },
                coord! { x: bbox.max_lon, y: bbox.max_lat },
            ),
            on_malformed,
        }
    }

    /// Filter a collection, consuming it. Collection-level members are kept.
    pub fn apply(
        &self,
        collection: FeatureCollection,
    ) -> Result<(FeatureCollection, FilterSummary)> {
        let FeatureCollection {
            geo_type,
            features,
            extra,
        } = collection;

        let mut summary = FilterSummary {
            initial: features.len(),
            ..Default::default()
        };
        let mut kept = Vec::new();

        for (index, feature) in features.into_iter().enumerate() {
            if feature.geometry_type() != Some("LineString") {
                continue;
            }

            let inside = match feature.shape() {
                Ok(CoordinateShape::Sequence(coords)) => {
                    coords.iter().all(|c| self.rect.intersects(c))
                }
                Ok(other) => {
                    let source = GeometryError::ShapeMismatch {
                        declared: "LineString".to_string(),
                        found: other.kind(),
                    };
                    self.handle_malformed(index, source)?;
                    summary.malformed += 1;
                    continue;
                }
                Err(source) => {
                    self.handle_malformed(index, source)?;
                    summary.malformed += 1;
                    continue;
                }
            };

            if inside {
                kept.push(feature);
            } else {
                debug!("Feature {} leaves the region, dropping", index);
            }
        }

        summary.kept = kept.len();

        Ok((
            FeatureCollection {
                geo_type,
                features: kept,
                extra,
            },
            summary,
        ))
    }

    fn handle_malformed(&self, index: usize, source: GeometryError) -> Result<()> {
        match self.on_malformed {
            MalformedPolicy::Abort => Err(PipelineError::Geometry { index, source }),
            MalformedPolicy::Skip => {
                warn!("Skipping feature {}: {}", index, source);
                Ok(())
            }
        }
    }
}
