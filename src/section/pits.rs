use ahash::AHashSet;
use geo::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Line};
use sectgeom::geodesic_distance_meters;
use serde::Serialize;

use super::{SectionError, SectionLine};
use crate::common::as_number;
use crate::geojson::{FeatureCollection, Geometry};
use crate::pit::PIT_BOUNDARY;

/// A pit-boundary crossing. `distance` is geodesic metres from the line start.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PitIntersection {
    pub point: [f64; 2],
    pub distance: f64,
    /// The crossed boundary's level.
    pub elevation: f64,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Every crossing between the section line and the pit LineStrings, ordered
/// by distance. Collinear overlaps contribute both overlap ends. Features
/// that are not LineStrings are ignored; LineStrings without a numeric
/// `level` are skipped, logged and returned alongside the crossings.
pub fn intersect_pits(pits: &FeatureCollection, line: &SectionLine) -> (Vec<PitIntersection>, Vec<SectionError>) {
    let section = line.as_line();
    let mut crossings = Vec::new();
    let mut skipped = Vec::new();

    for (index, feature) in pits.features.iter().enumerate() {
        let Geometry::LineString { coordinates } = &feature.geometry else { continue };

        let Some(level) = feature.properties.get("level").and_then(as_number) else {
            let e = SectionError::MissingLevel { index };
            log::warn!("[section::pits] {e}");
            skipped.push(e);
            continue;
        };

        // A crossing through a shared vertex is found on both adjacent segments.
        let mut seen = AHashSet::new();
        for point in polyline_crossings(coordinates, section) {
            if !seen.insert((point.x.to_bits(), point.y.to_bits())) { continue }
            crossings.push(PitIntersection {
                point: point.into(),
                distance: geodesic_distance_meters(line.start, point),
                elevation: level,
                kind: PIT_BOUNDARY,
            });
        }
    }

    crossings.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    (crossings, skipped)
}

fn polyline_crossings(coordinates: &[[f64; 2]], section: Line<f64>) -> Vec<Coord<f64>> {
    coordinates.windows(2)
        .filter_map(|pair| line_intersection(Line::new(pair[0], pair[1]), section))
        .flat_map(|hit| match hit {
            LineIntersection::SinglePoint { intersection, .. } => vec![intersection],
            LineIntersection::Collinear { intersection } => vec![intersection.start, intersection.end],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geojson::Feature;
    use serde_json::{json, Map};

    fn pit(level: Option<f64>, coordinates: Vec<[f64; 2]>) -> Feature {
        let mut properties = Map::new();
        if let Some(level) = level { properties.insert("level".into(), json!(level)); }
        properties.insert("type".into(), json!(PIT_BOUNDARY));
        Feature::new(Geometry::LineString { coordinates }, properties)
    }

    fn square(level: f64, x0: f64, x1: f64) -> Feature {
        pit(Some(level), vec![[x0, -0.001], [x1, -0.001], [x1, 0.001], [x0, 0.001], [x0, -0.001]])
    }

    #[test]
    fn closed_boundary_is_crossed_twice() {
        let line = SectionLine::new([0.0, 0.0], [0.01, 0.0]).unwrap();
        let pits = FeatureCollection::new(vec![square(50.0, 0.002, 0.004)]);

        let (hits, skipped) = intersect_pits(&pits, &line);
        assert!(skipped.is_empty());
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.elevation == 50.0 && h.kind == PIT_BOUNDARY));
        assert_relative_eq!(hits[0].point[0], 0.002, epsilon = 1e-12);
        assert_relative_eq!(hits[1].point[0], 0.004, epsilon = 1e-12);
        // 0.002 degrees of longitude on the equator
        assert_relative_eq!(hits[0].distance, 222.39, epsilon = 0.01);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn nested_levels_sorted_by_distance() {
        let line = SectionLine::new([0.0, 0.0], [0.01, 0.0]).unwrap();
        let pits = FeatureCollection::new(vec![square(40.0, 0.003, 0.005), square(60.0, 0.001, 0.008)]);

        let levels: Vec<f64> = intersect_pits(&pits, &line).0.iter().map(|h| h.elevation).collect();
        assert_eq!(levels, vec![60.0, 40.0, 40.0, 60.0]);
    }

    #[test]
    fn vertex_crossing_counted_once() {
        let line = SectionLine::new([0.0, 0.0], [0.01, 0.0]).unwrap();
        let pits = FeatureCollection::new(vec![pit(Some(10.0), vec![[0.005, -0.001], [0.005, 0.0], [0.006, 0.001]])]);
        assert_eq!(intersect_pits(&pits, &line).0.len(), 1);
    }

    #[test]
    fn features_without_level_are_skipped() {
        let line = SectionLine::new([0.0, 0.0], [0.01, 0.0]).unwrap();
        let pits = FeatureCollection::new(vec![
            square(50.0, 0.002, 0.004),
            pit(None, vec![[0.005, -0.001], [0.005, 0.001]]),
        ]);
        let (hits, skipped) = intersect_pits(&pits, &line);
        assert_eq!(hits.len(), 2);
        assert_eq!(skipped, vec![SectionError::MissingLevel { index: 1 }]);
    }

    #[test]
    fn distant_boundary_has_no_crossings() {
        let line = SectionLine::new([0.0, 0.0], [0.01, 0.0]).unwrap();
        let pits = FeatureCollection::new(vec![square(50.0, 1.0, 2.0)]);
        let (hits, skipped) = intersect_pits(&pits, &line);
        assert!(hits.is_empty() && skipped.is_empty());
    }
}
