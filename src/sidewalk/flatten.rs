//! Flatten feature geometries into classified coordinates.

use geo::Coord;

use crate::error::GeometryError;
use crate::models::{CoordinateShape, Feature};

/// A coordinate tagged with its feature's road classification.
/// The classification is borrowed from the feature it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedCoordinate<'a> {
    pub coord: Coord<f64>,
    pub classification: Option<&'a str>,
}

/// Emit one classified coordinate per vertex of `shape`, depth-first.
pub fn flatten_shape<'a>(
    shape: &CoordinateShape,
    classification: Option<&'a str>,
) -> Vec<ClassifiedCoordinate<'a>> {
    shape
        .coords()
        .map(|coord| ClassifiedCoordinate {
            coord,
            classification,
        })
        .collect()
}

/// Flatten a feature, reading its classification from `classification_key`.
/// Non-string classification values are treated as absent.
pub fn flatten_feature<'a>(
    feature: &'a Feature,
    classification_key: &str,
) -> Result<Vec<ClassifiedCoordinate<'a>>, GeometryError> {
    let shape = feature.shape()?;
    Ok(flatten_shape(
        &shape,
        feature.property_str(classification_key),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(value: serde_json::Value) -> Feature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_counts_by_shape() {
        let point = feature(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
            "properties": { "FC_STATUS": "Local" }
        }));
        assert_eq!(flatten_feature(&point, "FC_STATUS").unwrap().len(), 1);

        let line = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]] },
            "properties": {}
        }));
        assert_eq!(flatten_feature(&line, "FC_STATUS").unwrap().len(), 3);

        let multi = feature(json!({
            "type": "Feature",
            "geometry": {
                "type": "MultiLineString",
                "coordinates": [[[1.0, 2.0], [3.0, 4.0]], [[5.0, 6.0], [7.0, 8.0], [9.0, 10.0]]]
            },
            "properties": {}
        }));
        let flat = flatten_feature(&multi, "FC_STATUS").unwrap();
        assert_eq!(flat.len(), 5);
        let xs: Vec<f64> = flat.iter().map(|c| c.coord.x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_declared_type_is_ignored() {
        // A "LineString" whose coordinates physically nest two levels deep
        let mislabeled = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[[1.0, 2.0]], [[3.0, 4.0]]] },
            "properties": {}
        }));
        assert_eq!(flatten_feature(&mislabeled, "FC_STATUS").unwrap().len(), 2);
    }

    #[test]
    fn test_classification_shared_per_feature() {
        let line = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.0]] },
            "properties": { "FC_STATUS": "Minor Arterial" }
        }));
        let flat = flatten_feature(&line, "FC_STATUS").unwrap();
        assert!(flat
            .iter()
            .all(|c| c.classification == Some("Minor Arterial")));
    }

    #[test]
    fn test_absent_or_non_string_classification() {
        let numeric = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[1.0, 2.0]] },
            "properties": { "FC_STATUS": 3 }
        }));
        assert_eq!(
            flatten_feature(&numeric, "FC_STATUS").unwrap()[0].classification,
            None
        );

        let no_props = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[1.0, 2.0]] }
        }));
        assert_eq!(
            flatten_feature(&no_props, "FC_STATUS").unwrap()[0].classification,
            None
        );
    }

    #[test]
    fn test_empty_geometry_emits_nothing() {
        let empty = feature(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [] },
            "properties": {}
        }));
        assert!(flatten_feature(&empty, "FC_STATUS").unwrap().is_empty());
    }
}
