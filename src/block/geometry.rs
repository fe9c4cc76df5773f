use serde_json::{json, Value};

use super::Block;
use crate::geojson::{Feature, Geometry};
use crate::proj::{Converter, WGS84};

/// Rectangular footprint around a centroid, in the source projection:
/// bottom-left, bottom-right, top-right, top-left, then bottom-left again.
pub fn build_ring(centroid_x: f64, centroid_y: f64, dim_x: f64, dim_y: f64) -> [[f64; 2]; 5] {
    let (hx, hy) = (dim_x / 2.0, dim_y / 2.0);
    let (x0, x1) = (centroid_x - hx, centroid_x + hx);
    let (y0, y1) = (centroid_y - hy, centroid_y + hy);
    [[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]
}

/// Footprint of `block` in WGS84 `[lng, lat]`, or `None` when its centroid
/// or horizontal extents aren't numeric. Corners are converted one by one.
pub fn block_ring(block: &Block, projection: &str, converter: &mut Converter) -> Option<Vec<[f64; 2]>> {
    let ring = build_ring(block.centroid_x?, block.centroid_y?, block.dim_x?, block.dim_y?);
    if projection == WGS84 { return Some(ring.to_vec()) }
    Some(ring.iter().map(|&corner| converter.to_wgs84(corner, projection)).collect())
}

/// Polygon feature for a block. Properties carry the original record, the
/// normalised geometry fields, colour/opacity, `id` and the category.
pub fn block_feature(block: &Block, id: usize, ring: Vec<[f64; 2]>) -> Feature {
    let mut properties = block.attributes.clone();

    let fields = [
        ("centroid_x", block.centroid_x),
        ("centroid_y", block.centroid_y),
        ("centroid_z", block.centroid_z),
        ("dim_x", block.dim_x),
        ("dim_y", block.dim_y),
        ("dim_z", block.dim_z),
    ];
    for (name, value) in fields {
        properties.insert(name.to_string(), value.map_or(Value::Null, |v| json!(v)));
    }

    properties.insert("color".into(), block.color.as_ref().map_or(Value::Null, |c| json!(c)));
    properties.insert("opacity".into(), block.opacity.map_or(Value::Null, |o| json!(o)));
    properties.insert("id".into(), json!(id));
    properties.insert("selectedAttributeKey".into(), json!(block.attribute_key));
    properties.insert("categoryValue".into(), json!(block.attribute_value));

    Feature::new(Geometry::Polygon { coordinates: vec![ring] }, properties)
}
