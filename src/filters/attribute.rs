//! Filter features by administrative name and status code.

use serde_json::Value;

use super::FilterSummary;
use crate::config::Config;
use crate::models::{Feature, FeatureCollection};

/// Keeps features whose name matches and whose status is not the sentinel
#[derive(Debug, Clone)]
pub struct AttributeFilter {
    name_key: String,
    target_name: String,
    status_key: String,
    status_sentinel: f64,
}

impl AttributeFilter {
    pub fn new(
        name_key: impl Into<String>,
        target_name: impl Into<String>,
        status_key: impl Into<String>,
        status_sentinel: f64,
    ) -> Self {
        Self {
            name_key: name_key.into(),
            target_name: target_name.into(),
            status_key: status_key.into(),
            status_sentinel,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.name_key,
            &config.target_name,
            &config.status_key,
            config.status_sentinel,
        )
    }

    /// Whether a single feature survives the filter
    pub fn matches(&self, feature: &Feature) -> bool {
        let status_ok = !feature
            .property(&self.status_key)
            .map_or(false, |v| self.is_sentinel(v));
        let name_ok = feature.property_str(&self.name_key) == Some(self.target_name.as_str());

        status_ok && name_ok
    }

    /// Numeric comparison: `0` and `0.0` are the same status, and a JSON
    /// boolean counts as 0 or 1. Strings and nulls never match.
    fn is_sentinel(&self, value: &Value) -> bool {
        match value {
            Value::Number(n) => n.as_f64() == Some(self.status_sentinel),
            Value::Bool(b) => f64::from(u8::from(*b)) == self.status_sentinel,
            _ => false,
        }
    }

    pub fn apply(&self, collection: FeatureCollection) -> (FeatureCollection, FilterSummary) {
        let FeatureCollection {
            geo_type,
            features,
            extra,
        } = collection;

        let initial = features.len();
        let kept: Vec<Feature> = features.into_iter().filter(|f| self.matches(f)).collect();

        let summary = FilterSummary {
            initial,
            kept: kept.len(),
            malformed: 0,
        };

        (
            FeatureCollection {
                geo_type,
                features: kept,
                extra,
            },
            summary,
        )
    }
}
