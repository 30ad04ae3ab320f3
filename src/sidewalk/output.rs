//! Wrap offset points as a GeoJSON Point collection.

use geo::Coord;

use crate::models::{Feature, FeatureCollection};

/// One Point feature per offset point, in the given order, with empty properties.
pub fn assemble<I>(points: I) -> FeatureCollection
where
    I: IntoIterator<Item = Coord<f64>>,
{
    FeatureCollection::new(
        points
            .into_iter()
            .map(|c| Feature::point(c.x, c.y))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::to_pretty_string;

    #[test]
    fn test_order_preserved() {
        let points = vec![Coord { x: 2.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }];
        let collection = assemble(points);
        let xs: Vec<_> = collection
            .features
            .iter()
            .map(|f| f.coordinates().unwrap()[0].as_f64())
            .collect();
        assert_eq!(xs, vec![Some(2.0), Some(1.0)]);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let points = vec![
            Coord { x: -88.050121, y: 42.0 },
            Coord { x: -88.049879, y: 42.0 },
        ];
        let first = to_pretty_string(&assemble(points.clone())).unwrap();
        let second = to_pretty_string(&assemble(points)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collection() {
        let text = to_pretty_string(&assemble(Vec::new())).unwrap();
        assert_eq!(text, "{\n  \"type\": \"FeatureCollection\",\n  \"features\": []\n}\n");
    }
}
