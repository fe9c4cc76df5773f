//! Block-model ingestion: field normalisation, top-elevation filtering,
//! category colouring and footprint polygons.
mod fields;
mod filter;
mod geometry;
mod palette;
mod process;

pub use fields::{Block, FieldResolver, Row, DEFAULT_BLOCK_DIM};
pub use filter::filter_top_elevation;
pub use geometry::{block_feature, block_ring, build_ring};
pub use palette::{palette_color, CategoryStyle, CustomColors, DEFAULT_OPACITY, PALETTE};
pub use process::{block_model_to_geojson, prepare_blocks, process_block_model, BlockModelView, ProcessOptions};
