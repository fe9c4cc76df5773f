use geo::{BoundingRect, Coord, LineString, Rect};
use rstar::{RTree, RTreeObject, AABB};

/// Bounding box of a block footprint, associated with the block by index.
#[derive(Debug, Clone)]
pub(super) struct Footprint {
    idx: usize,
    bbox: Rect<f64>,
}

impl Footprint {
    /// Bounding box of `ring`, or `None` for an empty ring.
    pub(super) fn new(idx: usize, ring: &[Coord<f64>]) -> Option<Self> {
        let bbox = LineString::from(ring.to_vec()).bounding_rect()?;
        Some(Self { idx, bbox })
    }

    /// Index of the corresponding block.
    pub(super) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for Footprint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Indices of footprints whose bounding box meets the box spanned by `a-b`.
pub(super) fn candidates(footprints: Vec<Footprint>, a: Coord<f64>, b: Coord<f64>) -> Vec<usize> {
    let tree = RTree::bulk_load(footprints);
    let envelope = AABB::from_corners([a.x, a.y], [b.x, b.y]);
    let mut hits: Vec<usize> = tree.locate_in_envelope_intersecting(&envelope).map(Footprint::idx).collect();
    hits.sort_unstable();
    hits
}
