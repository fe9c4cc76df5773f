use ahash::{AHashMap, AHashSet};
use serde_json::{json, Map};

use super::PitPoint;
use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::proj::Converter;

/// `properties.type` of every reconstructed pit feature.
pub const PIT_BOUNDARY: &str = "pit_boundary";

/// How a point is recognised as one already seen on the current chain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointMatch {
    /// Bit-for-bit equal coordinates.
    #[default]
    Exact,
    /// Both coordinates within the given distance, in source units.
    Tolerance(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReconstructOptions {
    pub matching: PointMatch,
}

/// Raw `[x, y]` points sharing one exact elevation, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub z: f64,
    pub points: Vec<[f64; 2]>,
}

/// Group points by exact `z`, keeping first-seen level order and input order
/// within each level. Points missing a coordinate are dropped.
pub fn group_levels(points: &[PitPoint]) -> Vec<Level> {
    let mut index: AHashMap<u64, usize> = AHashMap::new();
    let mut levels: Vec<Level> = Vec::new();

    for [x, y, z] in points.iter().filter_map(PitPoint::xyz) {
        // -0.0 and 0.0 are the same level
        let z = unsigned_zero(z);
        let idx = *index.entry(z.to_bits()).or_insert_with(|| {
            levels.push(Level { z, points: Vec::new() });
            levels.len() - 1
        });
        levels[idx].points.push([x, y]);
    }

    levels
}

/// Rebuild pit boundaries with exact duplicate matching.
pub fn reconstruct(points: &[PitPoint], projection: &str, converter: &mut Converter) -> FeatureCollection {
    reconstruct_with(points, projection, converter, &ReconstructOptions::default())
}

/// Rebuild pit boundaries as WGS84 LineStrings, one or more per level.
///
/// Each level's points are walked in order. A point already on the current
/// chain closes a loop: the chain plus that point is emitted and a new chain
/// starts. Whatever is left at the end of the level is emitted as an open
/// chain. Chains need at least two points to be emitted.
pub fn reconstruct_with(
    points: &[PitPoint],
    projection: &str,
    converter: &mut Converter,
    options: &ReconstructOptions,
) -> FeatureCollection {
    let levels = group_levels(points);

    let mut features = Vec::new();
    for level in &levels {
        for chain in walk_level(&level.points, options.matching) {
            let coordinates = converter.convert_many(&chain, projection, crate::proj::WGS84);
            features.push(pit_feature(level.z, coordinates));
        }
    }

    log::debug!("[pit::reconstruct] levels={} features={}", levels.len(), features.len());
    FeatureCollection::new(features)
}

/// Split one level into closed loops and a trailing open chain.
fn walk_level(points: &[[f64; 2]], matching: PointMatch) -> Vec<Vec<[f64; 2]>> {
    let mut chains = Vec::new();
    let mut chain = Chain::default();

    for &point in points {
        if chain.contains(point, matching) {
            if chain.coords.len() > 1 {
                let mut closed = std::mem::take(&mut chain.coords);
                closed.push(point);
                chains.push(closed);
            }
            chain.clear();
        } else {
            chain.push(point);
        }
    }

    if chain.coords.len() > 1 { chains.push(chain.coords) }
    chains
}

#[derive(Default)]
struct Chain {
    coords: Vec<[f64; 2]>,
    seen: AHashSet<(u64, u64)>,
}

impl Chain {
    fn contains(&self, point: [f64; 2], matching: PointMatch) -> bool {
        match matching {
            PointMatch::Exact => self.seen.contains(&key(point)),
            PointMatch::Tolerance(eps) => self.coords.iter()
                .any(|c| (c[0] - point[0]).abs() <= eps && (c[1] - point[1]).abs() <= eps),
        }
    }

    fn push(&mut self, point: [f64; 2]) {
        self.seen.insert(key(point));
        self.coords.push(point);
    }

    fn clear(&mut self) {
        self.coords.clear();
        self.seen.clear();
    }
}

/// Bit-exact identity of a point, with `-0.0` and `0.0` treated as equal.
#[inline]
fn key([x, y]: [f64; 2]) -> (u64, u64) { (unsigned_zero(x).to_bits(), unsigned_zero(y).to_bits()) }

#[inline]
fn unsigned_zero(v: f64) -> f64 { if v == 0.0 { 0.0 } else { v } }

fn pit_feature(level: f64, coordinates: Vec<[f64; 2]>) -> Feature {
    let mut properties = Map::new();
    properties.insert("level".into(), json!(level));
    properties.insert("type".into(), json!(PIT_BOUNDARY));
    Feature::new(Geometry::LineString { coordinates }, properties)
}
