//! Core data models for the street and sidewalk collections.

pub mod feature;
pub mod shape;

pub use feature::{Feature, FeatureCollection};
pub use shape::CoordinateShape;
