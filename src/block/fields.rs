use serde_json::{Map, Value};

use crate::common::{as_label, as_number};

/// A raw block-model record, one per CSV row. Extra columns pass through.
pub type Row = Map<String, Value>;

/// Extent used when a record carries no dimension column at all.
pub const DEFAULT_BLOCK_DIM: f64 = 12.5;

/// Label given to records that have no value for the category attribute.
pub(crate) const MISSING_CATEGORY: &str = "unknown";

// Candidate column names per logical field, in priority order.
const CENTROID_X: &[&str] = &["centroid_x", "x", "X", "easting", "EASTING", "xc", "XC", "xcentre"];
const CENTROID_Y: &[&str] = &["centroid_y", "y", "Y", "northing", "NORTHING", "yc", "YC", "ycentre"];
const CENTROID_Z: &[&str] = &["centroid_z", "z", "Z", "elevation", "ELEVATION", "rl", "RL", "zc", "ZC", "zcentre"];
const DIM_X: &[&str] = &["dim_x", "xinc", "XINC", "width", "block_size"];
const DIM_Y: &[&str] = &["dim_y", "yinc", "YINC", "length", "block_size"];
const DIM_Z: &[&str] = &["dim_z", "zinc", "ZINC", "height", "block_size"];

/// A block-model record with its geometry fields normalised.
///
/// Centroid components are `None` when the column is missing or not numeric.
/// Dimensions fall back to the dataset default when the column is missing,
/// but are `None` when it is present and not numeric.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub centroid_x: Option<f64>,
    pub centroid_y: Option<f64>,
    pub centroid_z: Option<f64>,
    pub dim_x: Option<f64>,
    pub dim_y: Option<f64>,
    pub dim_z: Option<f64>,
    /// Column the block is categorised by.
    pub attribute_key: String,
    /// Category value of this block.
    pub attribute_value: String,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    /// The original record.
    pub attributes: Row,
}

impl Block {
    /// `[x, y, z]` when every centroid component is present.
    pub fn centroid(&self) -> Option<[f64; 3]> {
        Some([self.centroid_x?, self.centroid_y?, self.centroid_z?])
    }
}

/// Column names resolved once per dataset, from its first record.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldResolver {
    centroid: [Option<String>; 3],
    dims: [Option<String>; 3],
    attribute_key: String,
    default_dim: f64,
}

impl FieldResolver {
    /// Resolve column names against `first`. The attribute key matches
    /// case-insensitively (`"Rock"` finds a `rock` column); when nothing
    /// matches, it is used verbatim.
    pub fn resolve(first: &Row, attribute_key: &str, default_dim: f64) -> Self {
        let attribute_key = first.keys()
            .find(|key| key.eq_ignore_ascii_case(attribute_key))
            .cloned()
            .unwrap_or_else(|| attribute_key.to_string());

        Self {
            centroid: [find_column(first, CENTROID_X), find_column(first, CENTROID_Y), find_column(first, CENTROID_Z)],
            dims: [find_column(first, DIM_X), find_column(first, DIM_Y), find_column(first, DIM_Z)],
            attribute_key,
            default_dim,
        }
    }

    /// The attribute column the records are categorised by.
    #[inline] pub fn attribute_key(&self) -> &str { &self.attribute_key }

    /// Normalise one record.
    pub fn normalize(&self, row: &Row) -> Block {
        let number = |column: &Option<String>| column.as_ref().and_then(|c| row.get(c)).and_then(as_number);
        let dim = |column: &Option<String>| match column.as_ref().and_then(|c| row.get(c)) {
            None | Some(Value::Null) => Some(self.default_dim),
            Some(value) => as_number(value),
        };

        Block {
            centroid_x: number(&self.centroid[0]),
            centroid_y: number(&self.centroid[1]),
            centroid_z: number(&self.centroid[2]),
            dim_x: dim(&self.dims[0]),
            dim_y: dim(&self.dims[1]),
            dim_z: dim(&self.dims[2]),
            attribute_key: self.attribute_key.clone(),
            attribute_value: self.category(row),
            color: row.get("color").and_then(Value::as_str).map(str::to_string),
            opacity: row.get("opacity").and_then(as_number),
            attributes: row.clone(),
        }
    }

    /// Category label of a record under the resolved attribute key.
    pub fn category(&self, row: &Row) -> String {
        row.get(&self.attribute_key)
            .and_then(as_label)
            .unwrap_or_else(|| MISSING_CATEGORY.to_string())
    }
}

/// First candidate present in the record: exact names first, then case-insensitive.
fn find_column(row: &Row, candidates: &[&str]) -> Option<String> {
    candidates.iter()
        .find(|name| row.contains_key(**name))
        .map(|name| name.to_string())
        .or_else(|| {
            candidates.iter()
                .find_map(|name| row.keys().find(|key| key.eq_ignore_ascii_case(name)))
                .cloned()
        })
}
