//! Structural classification of GeoJSON `coordinates` values.
//!
//! The declared geometry type is never consulted here: a value is
//! classified purely by how deeply its arrays nest, by peeking at the
//! first element at each level.

use geo::Coord;
use serde_json::Value;

use crate::error::GeometryError;

/// The three coordinate layouts the pipeline accepts
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateShape {
    /// `[x, y]` (Point-like)
    Single(Coord<f64>),
    /// `[[x, y], ...]` (LineString-like)
    Sequence(Vec<Coord<f64>>),
    /// `[[[x, y], ...], ...]` (MultiLineString-like)
    Nested(Vec<Vec<Coord<f64>>>),
}

impl CoordinateShape {
    /// Classify a raw `coordinates` value.
    ///
    /// An empty array is an empty `Sequence`. A sequence whose first
    /// element is an empty array is treated as `Nested`.
    pub fn classify(value: &Value) -> Result<Self, GeometryError> {
        let items = as_array(value)?;

        match items.first() {
            None => Ok(Self::Sequence(Vec::new())),
            Some(Value::Array(first)) => {
                let nested = match first.first() {
                    None => true,
                    Some(inner) => inner.is_array(),
                };

                if nested {
                    items
                        .iter()
                        .map(parse_line)
                        .collect::<Result<Vec<_>, _>>()
                        .map(Self::Nested)
                } else {
                    items
                        .iter()
                        .map(parse_coord)
                        .collect::<Result<Vec<_>, _>>()
                        .map(Self::Sequence)
                }
            }
            Some(_) => parse_coord(value).map(Self::Single),
        }
    }

    /// Short name of the layout, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Single(_) => "point",
            Self::Sequence(_) => "linestring",
            Self::Nested(_) => "multilinestring",
        }
    }

    /// Total number of coordinates across all levels
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Sequence(coords) => coords.len(),
            Self::Nested(lines) => lines.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinates in depth-first, left-to-right order
    pub fn coords(&self) -> Box<dyn Iterator<Item = Coord<f64>> + '_> {
        match self {
            Self::Single(c) => Box::new(std::iter::once(*c)),
            Self::Sequence(coords) => Box::new(coords.iter().copied()),
            Self::Nested(lines) => Box::new(lines.iter().flatten().copied()),
        }
    }
}

fn as_array(value: &Value) -> Result<&Vec<Value>, GeometryError> {
    value
        .as_array()
        .ok_or_else(|| GeometryError::NotAnArray(json_kind(value)))
}

fn parse_line(value: &Value) -> Result<Vec<Coord<f64>>, GeometryError> {
    as_array(value)?.iter().map(parse_coord).collect()
}

/// Parse `[x, y, ...]`. Anything past the second element is ignored.
fn parse_coord(value: &Value) -> Result<Coord<f64>, GeometryError> {
    let items = as_array(value)?;

    if items.first().map_or(false, Value::is_array) {
        return Err(GeometryError::TooDeep);
    }

    match (
        items.first().and_then(Value::as_f64),
        items.get(1).and_then(Value::as_f64),
    ) {
        (Some(x), Some(y)) => Ok(Coord { x, y }),
        _ => Err(GeometryError::InvalidCoordinate(value.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
