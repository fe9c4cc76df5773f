// Integration tests for the primitives a section line is cut with:
//   segment intersection, containment, projection and the two distance
//   conventions.

use approx::assert_relative_eq;
use geo::Coord;
use sectgeom::*;

fn c(x: f64, y: f64) -> Coord<f64> { Coord { x, y } }

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Coord<f64>> {
    vec![c(x0, y0), c(x1, y0), c(x1, y1), c(x0, y1), c(x0, y0)]
}

#[test]
fn crossing_segments_meet_at_midpoint() {
    let hit = segment_intersection(c(0.0, 0.0), c(2.0, 2.0), c(0.0, 2.0), c(2.0, 0.0));
    assert_eq!(hit, Some(c(1.0, 1.0)));
}

#[test]
fn disjoint_segments_do_not_meet() {
    let hit = segment_intersection(c(0.0, 0.0), c(1.0, 0.0), c(2.0, -1.0), c(2.0, 1.0));
    assert!(hit.is_none());
}

#[test]
fn line_through_rectangle_hits_two_edges() {
    let ring = rect(0.0, 0.0, 10.0, 10.0);
    let (start, end) = (c(-5.0, 5.0), c(15.0, 5.0));
    let hits: Vec<_> = ring.windows(2)
        .filter_map(|edge| segment_intersection(start, end, edge[0], edge[1]))
        .collect();
    assert_eq!(hits.len(), 2);

    let mut distances: Vec<f64> = hits.iter().map(|p| planar_distance(start, *p)).collect();
    distances.sort_by(f64::total_cmp);
    assert_relative_eq!(distances[0], 5.0);
    assert_relative_eq!(distances[1], 15.0);
}

#[test]
fn containment_inside_and_outside() {
    let ring = rect(0.0, 0.0, 10.0, 10.0);
    assert!(point_in_ring(c(5.0, 5.0), &ring));
    assert!(point_in_ring(c(0.1, 9.9), &ring));
    assert!(!point_in_ring(c(-0.1, 5.0), &ring));
    assert!(!point_in_ring(c(5.0, 10.5), &ring));
}

#[test]
fn containment_works_on_open_ring() {
    let ring = rect(0.0, 0.0, 10.0, 10.0);
    assert!(point_in_ring(c(5.0, 5.0), &ring[..4]));
}

#[test]
fn projection_is_clamped_to_segment() {
    let (a, b) = (c(0.0, 0.0), c(10.0, 0.0));

    let mid = project_onto_segment(c(4.0, 3.0), a, b);
    assert_eq!(mid.point, c(4.0, 0.0));
    assert_relative_eq!(mid.t, 0.4);
    assert_relative_eq!(mid.distance, 4.0);

    let before = project_onto_segment(c(-4.0, 3.0), a, b);
    assert_eq!(before.point, a);
    assert_eq!(before.t, 0.0);

    let after = project_onto_segment(c(14.0, -3.0), a, b);
    assert_eq!(after.point, b);
    assert_eq!(after.t, 1.0);
}

#[test]
fn interpolation_endpoints() {
    let (a, b) = (c(1.0, 2.0), c(3.0, 6.0));
    assert_eq!(interpolate(a, b, 0.0), a);
    assert_eq!(interpolate(a, b, 1.0), b);
    assert_eq!(interpolate(a, b, 0.5), c(2.0, 4.0));
}

#[test]
fn geodesic_and_planar_disagree_on_degrees() {
    let (a, b) = (c(129.0, -9.0), c(129.01, -9.0));
    assert_relative_eq!(planar_distance(a, b), 0.01, epsilon = 1e-12);
    // 0.01 deg of longitude at 9 degrees south is about 1.1 km
    let meters = geodesic_distance_meters(a, b);
    assert!((1090.0..1110.0).contains(&meters), "got {meters}");
}
