use geo::{Centroid, Coord, LineString, Polygon};

/// True when the ring's first and last coordinates are identical.
#[inline]
pub fn ring_is_closed(ring: &[Coord<f64>]) -> bool {
    ring.len() > 1 && ring.first() == ring.last()
}

/// Ray-casting containment test. The ring may be open or explicitly closed;
/// a closing duplicate contributes a zero-length edge and changes nothing.
/// Points exactly on an edge may land on either side.
pub fn point_in_ring(point: Coord<f64>, ring: &[Coord<f64>]) -> bool {
    if ring.len() < 3 { return false }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (pi, pj) = (ring[i], ring[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Area centroid of the polygon bounded by `ring`, open or closed.
/// Zero-area rings fall back to the centroid of their outline.
/// Returns `None` for an empty ring.
pub fn ring_centroid(ring: &[Coord<f64>]) -> Option<Coord<f64>> {
    Polygon::new(LineString::from(ring.to_vec()), vec![]).centroid().map(Coord::from)
}
