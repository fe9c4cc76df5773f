//! Survey elevation points: conversion to WGS84, point features, and
//! inverse-distance-weighted lookups.

use rstar::{primitives::GeomWithData, RTree};
use serde_json::{json, Map, Value};

use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::proj::{Converter, WGS84};

/// Distance under which a sample is treated as sitting on a survey point.
const EXACT_MATCH: f64 = 1e-7;

/// One elevation survey point. `lon`/`lat` hold the easting/northing while
/// the point is still in a projected system.
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationPoint {
    pub lat: f64,
    pub lon: f64,
    pub z: f64,
    pub id: Option<String>,
    pub desc: Option<String>,
}

impl ElevationPoint {
    pub fn new(lon: f64, lat: f64, z: f64) -> Self {
        Self { lat, lon, z, id: None, desc: None }
    }
}

/// Convert points from `projection` into WGS84.
pub fn to_wgs84(points: &[ElevationPoint], projection: &str, converter: &mut Converter) -> Vec<ElevationPoint> {
    points.iter()
        .map(|p| {
            let [lon, lat] = converter.convert([p.lon, p.lat], projection, WGS84);
            ElevationPoint { lat, lon, ..p.clone() }
        })
        .collect()
}

/// Point features in WGS84 with `elevation`, `id` and `desc` properties.
pub fn to_feature_collection(points: &[ElevationPoint], projection: &str, converter: &mut Converter) -> FeatureCollection {
    let features = to_wgs84(points, projection, converter).into_iter()
        .map(|p| {
            let mut properties = Map::new();
            properties.insert("elevation".into(), json!(p.z));
            properties.insert("id".into(), p.id.map_or(Value::Null, Value::String));
            properties.insert("desc".into(), p.desc.map_or(Value::Null, Value::String));
            Feature::new(Geometry::Point { coordinates: [p.lon, p.lat] }, properties)
        })
        .collect();
    FeatureCollection::new(features)
}

type Sample = GeomWithData<[f64; 2], f64>;

/// Spatial index over elevation points for radius-limited IDW.
pub struct ElevationIndex {
    tree: RTree<Sample>,
}

impl ElevationIndex {
    /// Index points by `[lon, lat]`.
    pub fn new(points: &[ElevationPoint]) -> Self {
        let samples = points.iter()
            .filter(|p| p.lon.is_finite() && p.lat.is_finite() && p.z.is_finite())
            .map(|p| Sample::new([p.lon, p.lat], p.z))
            .collect();
        Self { tree: RTree::bulk_load(samples) }
    }

    #[inline] pub fn len(&self) -> usize { self.tree.size() }

    #[inline] pub fn is_empty(&self) -> bool { self.tree.size() == 0 }

    /// Inverse-distance-weighted elevation at `[lon, lat]` from points within
    /// `radius` (planar, same units as the points), with weight `1 / d^power`.
    /// A point closer than 1e-7 returns its own elevation. `None` when no
    /// point is in range.
    pub fn interpolate(&self, at: [f64; 2], radius: f64, power: f64) -> Option<f64> {
        let mut weighted = 0.0;
        let mut total = 0.0;

        for sample in self.tree.locate_within_distance(at, radius * radius) {
            let [x, y] = *sample.geom();
            let d = (x - at[0]).hypot(y - at[1]);
            if d < EXACT_MATCH { return Some(sample.data) }

            let w = 1.0 / d.powf(power);
            weighted += w * sample.data;
            total += w;
        }

        (total > 0.0).then(|| weighted / total)
    }
}
