use geo::Coord;

use crate::distance::planar_distance;

/// Intersection of segments `p1-p2` and `p3-p4` using the parametric
/// determinant form. Both parameters `ua` (along `p1-p2`) and `ub` (along
/// `p3-p4`) must fall in `[0, 1]`. Parallel and collinear segments yield `None`.
pub fn segment_intersection(
    p1: Coord<f64>,
    p2: Coord<f64>,
    p3: Coord<f64>,
    p4: Coord<f64>,
) -> Option<Coord<f64>> {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 { return None }

    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / denom;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) { return None }

    Some(interpolate(p1, p2, ua))
}

/// Point at fraction `t` of the way from `a` to `b`.
#[inline]
pub fn interpolate(a: Coord<f64>, b: Coord<f64>, t: f64) -> Coord<f64> {
    Coord { x: a.x + t * (b.x - a.x), y: a.y + t * (b.y - a.y) }
}

/// Orthogonal projection of a point onto a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Projected point, on the segment.
    pub point: Coord<f64>,
    /// Segment parameter, clamped to `[0, 1]`.
    pub t: f64,
    /// Planar distance from the segment start to `point`.
    pub distance: f64,
}

/// Project `p` onto the segment `a-b`, clamping to the endpoints.
/// A zero-length segment projects everything onto `a`.
pub fn project_onto_segment(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> Projection {
    let d = b - a;
    let len2 = d.x * d.x + d.y * d.y;
    let t = if len2 == 0.0 { 0.0 } else { (((p.x - a.x) * d.x + (p.y - a.y) * d.y) / len2).clamp(0.0, 1.0) };
    let point = interpolate(a, b, t);
    Projection { point, t, distance: planar_distance(a, point) }
}
