use geo::{Coord, Distance, Haversine, HaversineMeasure, Point};

/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = HaversineMeasure::GRS80_MEAN_RADIUS.radius();

/// Straight-line distance in the coordinates' own units.
#[inline]
pub fn planar_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Great-circle distance in metres between two `[lng, lat]` degree coordinates
/// (haversine on a sphere of [`EARTH_RADIUS_M`]).
pub fn geodesic_distance_meters(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_three_four_five() {
        let d = planar_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
        assert_eq!(d, 5.0);
    }

    #[test]
    fn geodesic_zero_for_same_point() {
        let p = Coord { x: 129.0, y: -9.5 };
        assert_eq!(geodesic_distance_meters(p, p), 0.0);
    }

    #[test]
    fn geodesic_one_degree_of_latitude() {
        let d = geodesic_distance_meters(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 });
        // pi * R / 180
        assert!((d - 111_195.08).abs() < 1.0, "got {d}");
    }
}
