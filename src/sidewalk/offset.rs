//! Classification-dependent lateral offset of a single coordinate.

use geo::Coord;

use super::flatten::ClassifiedCoordinate;
use crate::config::Config;

/// Classification value that selects the wide offset
pub const MINOR_ARTERIAL: &str = "Minor Arterial";

/// Offset magnitudes in decimal degrees of longitude.
///
/// The defaults approximate ~10 m for minor arterials and ~3 m for every
/// other road at the latitude of the default region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetPolicy {
    pub minor_arterial: f64,
    pub default: f64,
}

impl Default for OffsetPolicy {
    fn default() -> Self {
        Self {
            minor_arterial: 0.000121,
            default: 0.000039,
        }
    }
}

impl OffsetPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            minor_arterial: config.minor_arterial_offset,
            default: config.default_offset,
        }
    }

    /// Offset magnitude for a classification
    pub fn magnitude(&self, classification: Option<&str>) -> f64 {
        match classification {
            Some(MINOR_ARTERIAL) => self.minor_arterial,
            _ => self.default,
        }
    }

    /// The two sidewalk points for one coordinate: `x - m` then `x + m`.
    /// Latitude is left untouched.
    pub fn offset(&self, point: &ClassifiedCoordinate<'_>) -> [Coord<f64>; 2] {
        let m = self.magnitude(point.classification);
        let Coord { x, y } = point.coord;
        [Coord { x: x - m, y }, Coord { x: x + m, y }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(x: f64, y: f64, classification: Option<&str>) -> ClassifiedCoordinate<'_> {
        ClassifiedCoordinate {
            coord: Coord { x, y },
            classification,
        }
    }

    #[test]
    fn test_minor_arterial_magnitude() {
        let policy = OffsetPolicy::default();
        let [left, right] = policy.offset(&classified(-88.05, 42.0, Some("Minor Arterial")));
        assert!((left.x - -88.050121).abs() < 1e-12);
        assert!((right.x - -88.049879).abs() < 1e-12);
        assert_eq!(left.y, 42.0);
        assert_eq!(right.y, 42.0);
    }

    #[test]
    fn test_other_classifications_use_default() {
        let policy = OffsetPolicy::default();
        for class in [None, Some("Local"), Some("minor arterial"), Some("")] {
            assert_eq!(policy.magnitude(class), 0.000039);
            let [left, right] = policy.offset(&classified(10.0, -5.0, class));
            assert_eq!(left.x, 10.0 - 0.000039);
            assert_eq!(right.x, 10.0 + 0.000039);
            assert_eq!(left.y, -5.0);
        }
    }

    #[test]
    fn test_configured_magnitudes() {
        let config = Config {
            minor_arterial_offset: 0.5,
            default_offset: 0.25,
            ..Config::default()
        };
        let policy = OffsetPolicy::from_config(&config);
        assert_eq!(policy.magnitude(Some(MINOR_ARTERIAL)), 0.5);
        assert_eq!(policy.offset(&classified(1.0, 1.0, None)), [
            Coord { x: 0.75, y: 1.0 },
            Coord { x: 1.25, y: 1.0 }
        ]);
    }
}
