//! Sidewalk point generation.
//!
//! Every coordinate of every street feature becomes two points, shifted
//! west and east by a distance picked from the feature's road class.

mod flatten;
mod offset;
mod output;

pub use flatten::{flatten_feature, flatten_shape, ClassifiedCoordinate};
pub use offset::{OffsetPolicy, MINOR_ARTERIAL};
pub use output::assemble;

use tracing::{debug, warn};

use crate::config::{Config, MalformedPolicy};
use crate::error::{PipelineError, Result};
use crate::models::FeatureCollection;

/// Counts from one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidewalkStats {
    pub features: usize,
    pub skipped: usize,
    pub coordinates: usize,
    pub points: usize,
}

/// Turns a street collection into a sidewalk point collection
#[derive(Debug, Clone)]
pub struct SidewalkGenerator {
    policy: OffsetPolicy,
    classification_key: String,
    on_malformed: MalformedPolicy,
}

impl SidewalkGenerator {
    pub fn new(
        policy: OffsetPolicy,
        classification_key: impl Into<String>,
        on_malformed: MalformedPolicy,
    ) -> Self {
        Self {
            policy,
            classification_key: classification_key.into(),
            on_malformed,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            OffsetPolicy::from_config(config),
            &config.classification_key,
            config.on_malformed,
        )
    }

    /// Generate the point collection. The input is only read.
    pub fn generate(
        &self,
        streets: &FeatureCollection,
    ) -> Result<(FeatureCollection, SidewalkStats)> {
        let mut stats = SidewalkStats {
            features: streets.len(),
            ..Default::default()
        };
        let mut classified = Vec::new();

        for (index, feature) in streets.features.iter().enumerate() {
            match flatten_feature(feature, &self.classification_key) {
                Ok(coords) => classified.extend(coords),
                Err(source) => match self.on_malformed {
                    MalformedPolicy::Abort => {
                        return Err(PipelineError::Geometry { index, source })
                    }
                    MalformedPolicy::Skip => {
                        warn!("Skipping feature {}: {}", index, source);
                        stats.skipped += 1;
                    }
                },
            }
        }

        stats.coordinates = classified.len();
        debug!(
            "Flattened {} coordinates from {} features",
            stats.coordinates, stats.features
        );

        let collection = assemble(classified.iter().flat_map(|c| self.policy.offset(c)));
        stats.points = collection.len();

        Ok((collection, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use serde_json::json;

    fn streets(features: serde_json::Value) -> FeatureCollection {
        serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
            .unwrap()
    }

    fn points(collection: &FeatureCollection) -> Vec<Coord<f64>> {
        collection
            .features
            .iter()
            .map(|f| {
                let coords = f.coordinates().unwrap();
                Coord {
                    x: coords[0].as_f64().unwrap(),
                    y: coords[1].as_f64().unwrap(),
                }
            })
            .collect()
    }

    fn assert_points(actual: &[Coord<f64>], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len());
        for (a, (x, y)) in actual.iter().zip(expected) {
            assert!((a.x - x).abs() < 1e-9, "x {} != {}", a.x, x);
            assert_eq!(a.y, *y);
        }
    }

    fn generator() -> SidewalkGenerator {
        SidewalkGenerator::from_config(&Config::default())
    }

    #[test]
    fn test_minor_arterial_end_to_end() {
        let input = streets(json!([{
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[-88.05, 42.0], [-88.04, 42.01]] },
            "properties": { "FC_STATUS": "Minor Arterial" }
        }]));

        let (out, stats) = generator().generate(&input).unwrap();
        assert_points(
            &points(&out),
            &[
                (-88.050121, 42.0),
                (-88.049879, 42.0),
                (-88.040121, 42.01),
                (-88.039879, 42.01),
            ],
        );
        assert_eq!(stats.coordinates, 2);
        assert_eq!(stats.points, 4);
    }

    #[test]
    fn test_unclassified_end_to_end() {
        let input = streets(json!([{
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[-88.05, 42.0], [-88.04, 42.01]] },
            "properties": {}
        }]));

        let (out, _) = generator().generate(&input).unwrap();
        assert_points(
            &points(&out),
            &[
                (-88.050039, 42.0),
                (-88.049961, 42.0),
                (-88.040039, 42.01),
                (-88.039961, 42.01),
            ],
        );
    }

    #[test]
    fn test_point_count_is_twice_coordinates() {
        let input = streets(json!([
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [1.0, 1.0] },
                "properties": { "FC_STATUS": "Local" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "MultiLineString", "coordinates": [[[1.0, 1.0], [2.0, 2.0]], [[3.0, 3.0]]] },
                "properties": { "FC_STATUS": "Minor Arterial" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [] },
                "properties": {}
            }
        ]));

        let (out, stats) = generator().generate(&input).unwrap();
        assert_eq!(stats.coordinates, 4);
        assert_eq!(out.len(), 2 * stats.coordinates);
        assert!(out
            .features
            .iter()
            .all(|f| f.properties().map_or(false, |p| p.is_empty())));
    }

    #[test]
    fn test_input_left_untouched() {
        let input = streets(json!([{
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[1.0, 1.0]] },
            "properties": {}
        }]));
        let before = input.clone();
        generator().generate(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_malformed_geometry_policies() {
        let input = streets(json!([
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[1.0, 1.0]] },
                "properties": {}
            },
            { "type": "Feature", "geometry": null, "properties": {} }
        ]));

        let err = generator().generate(&input).unwrap_err();
        assert!(matches!(err, PipelineError::Geometry { index: 1, .. }));

        let skipping =
            SidewalkGenerator::new(OffsetPolicy::default(), "FC_STATUS", MalformedPolicy::Skip);
        let (out, stats) = skipping.generate(&input).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_empty_input() {
        let (out, stats) = generator().generate(&FeatureCollection::default()).unwrap();
        assert!(out.is_empty());
        assert_eq!(stats, SidewalkStats::default());
    }
}
