use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use super::fields::{FieldResolver, DEFAULT_BLOCK_DIM};
use super::palette::category_style;
use super::{block_feature, block_ring, filter_top_elevation, Block, CustomColors, Row};
use crate::geojson::FeatureCollection;
use crate::proj::Converter;

/// Zoom level for the full model.
const ZOOM_ALL_BLOCKS: u8 = 12;
/// Zoom level when only the top surface is shown.
const ZOOM_TOP_ELEVATION: u8 = 14;

/// Options for turning block-model rows into features.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessOptions {
    /// Column to categorise and colour by, matched case-insensitively.
    pub attribute_key: String,
    /// Keep only the highest block of every column.
    pub top_elevation_only: bool,
    /// Per-category colour/opacity overrides.
    pub custom_colors: Option<CustomColors>,
    /// Extent for records with no dimension columns.
    pub default_dim: f64,
    /// Upper bound on emitted features; larger batches are thinned by stride.
    pub max_features: Option<usize>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            attribute_key: "rock".to_string(),
            top_elevation_only: false,
            custom_colors: None,
            default_dim: DEFAULT_BLOCK_DIM,
            max_features: None,
        }
    }
}

/// Feature collection plus the map framing the viewer opens with.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockModelView {
    pub geojson: FeatureCollection,
    /// `[lat, lng]` of the first feature's first vertex.
    pub map_center: Option<[f64; 2]>,
    pub map_zoom: u8,
    pub is_export_enabled: bool,
}

/// Normalise, colour and optionally filter block-model rows.
///
/// Colours are assigned over the unfiltered rows, so a category keeps its
/// colour whether or not the top-elevation filter runs.
pub fn prepare_blocks(rows: &[Row], options: &ProcessOptions) -> Vec<Block> {
    let Some(first) = rows.first() else { return Vec::new() };

    let resolver = FieldResolver::resolve(first, &options.attribute_key, options.default_dim);
    let blocks: Vec<Block> = rows.iter().map(|row| resolver.normalize(row)).collect();
    let styles = category_styles(&blocks, options.custom_colors.as_ref());

    let blocks = if options.top_elevation_only { filter_top_elevation(blocks) } else { blocks };
    let mut blocks = thin(blocks, options.max_features);

    for block in &mut blocks {
        if let Some((color, opacity)) = styles.get(&block.attribute_value) {
            block.color = Some(color.clone());
            block.opacity = Some(*opacity);
        }
    }

    log::debug!(
        "[block::prepare] rows={} blocks={} categories={} key={}",
        rows.len(), blocks.len(), styles.len(), resolver.attribute_key()
    );
    blocks
}

/// Convert block-model rows into a WGS84 polygon FeatureCollection.
/// Rows with non-numeric geometry are skipped and logged.
pub fn process_block_model(
    rows: &[Row],
    projection: &str,
    options: &ProcessOptions,
    converter: &mut Converter,
) -> FeatureCollection {
    let blocks = prepare_blocks(rows, options);

    let mut features = Vec::with_capacity(blocks.len());
    for (id, block) in blocks.iter().enumerate() {
        match block_ring(block, projection, converter) {
            Some(ring) => features.push(block_feature(block, id, ring)),
            None => log::warn!("[block::process] skipping block {id}: non-numeric centroid or extent"),
        }
    }

    log::debug!("[block::process] {} of {} blocks converted", features.len(), blocks.len());
    FeatureCollection::new(features)
}

/// [`process_block_model`] plus the initial map framing.
pub fn block_model_to_geojson(
    rows: &[Row],
    projection: &str,
    options: &ProcessOptions,
    converter: &mut Converter,
) -> BlockModelView {
    let geojson = process_block_model(rows, projection, options, converter);

    let map_center = geojson.features.first()
        .and_then(|feature| feature.geometry.first_coord())
        .map(|[lng, lat]| [lat, lng]);
    let map_zoom = if options.top_elevation_only { ZOOM_TOP_ELEVATION } else { ZOOM_ALL_BLOCKS };
    let is_export_enabled = !geojson.is_empty();

    BlockModelView { geojson, map_center, map_zoom, is_export_enabled }
}

/// Colour and opacity per category, indexed by order of first appearance.
fn category_styles(blocks: &[Block], custom: Option<&CustomColors>) -> AHashMap<String, (String, f64)> {
    let mut seen = AHashSet::new();
    blocks.iter()
        .map(|block| block.attribute_value.as_str())
        .filter(|value| seen.insert(*value))
        .enumerate()
        .map(|(index, value)| (value.to_string(), category_style(index, value, custom)))
        .collect()
}

/// Keep every k-th block so at most `limit` remain.
fn thin(blocks: Vec<Block>, limit: Option<usize>) -> Vec<Block> {
    let Some(limit) = limit.filter(|&l| l > 0 && blocks.len() > l) else { return blocks };

    let stride = blocks.len().div_ceil(limit);
    log::debug!("[block::thin] {} blocks exceed {limit}, keeping every {stride}th", blocks.len());
    blocks.into_iter().step_by(stride).collect()
}
