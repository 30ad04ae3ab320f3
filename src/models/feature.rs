//! GeoJSON feature documents as read from and written to disk.
//!
//! A feature keeps every member it was read with (`geometry`, `properties`,
//! `id`, foreign members) in one map, so filter stages write features back
//! out exactly as they came in: an absent member stays absent and an
//! explicit `null` stays `null`. Typed access goes through accessors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::shape::CoordinateShape;
use crate::error::GeometryError;

fn feature_collection_tag() -> String {
    "FeatureCollection".to_string()
}

fn feature_tag() -> String {
    "Feature".to_string()
}

/// Top-level GeoJSON FeatureCollection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_tag")]
    pub geo_type: String,

    pub features: Vec<Feature>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            geo_type: feature_collection_tag(),
            features,
            extra: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A single GeoJSON Feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_tag")]
    pub geo_type: String,

    /// Every other member, verbatim
    #[serde(flatten)]
    pub members: Map<String, Value>,
}

impl Feature {
    /// A Point feature with empty properties
    pub fn point(x: f64, y: f64) -> Self {
        let mut members = Map::new();
        members.insert(
            "geometry".to_string(),
            json!({ "type": "Point", "coordinates": [x, y] }),
        );
        members.insert("properties".to_string(), Value::Object(Map::new()));

        Self {
            geo_type: feature_tag(),
            members,
        }
    }

    /// The `properties` object. Absent, `null` or non-object all read as `None`.
    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.members.get("properties").and_then(Value::as_object)
    }

    /// Look up a property value, treating missing `properties` as empty.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties().and_then(|props| props.get(key))
    }

    /// Look up a string-valued property.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(Value::as_str)
    }

    fn geometry(&self) -> Option<&Map<String, Value>> {
        self.members.get("geometry").and_then(Value::as_object)
    }

    /// Declared geometry type, if any
    pub fn geometry_type(&self) -> Option<&str> {
        self.geometry()
            .and_then(|g| g.get("type"))
            .and_then(Value::as_str)
    }

    /// Raw `geometry.coordinates` value
    pub fn coordinates(&self) -> Option<&Value> {
        self.geometry().and_then(|g| g.get("coordinates"))
    }

    /// Classify this feature's coordinates by nesting depth.
    pub fn shape(&self) -> Result<CoordinateShape, GeometryError> {
        let geometry = self.geometry().ok_or(GeometryError::MissingGeometry)?;
        let coordinates = geometry
            .get("coordinates")
            .ok_or(GeometryError::MissingCoordinates)?;
        CoordinateShape::classify(coordinates)
    }
}
