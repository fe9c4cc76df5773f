#![doc = "geomine public API"]
pub mod cli;
pub mod commands;
mod common;
pub mod block;
pub mod elevation;
pub mod geojson;
pub mod io;
pub mod pit;
pub mod proj;
pub mod section;

#[doc(inline)]
pub use block::{block_model_to_geojson, prepare_blocks, process_block_model, Block, BlockModelView, CustomColors, ProcessOptions, Row};

#[doc(inline)]
pub use elevation::{ElevationIndex, ElevationPoint};

#[doc(inline)]
pub use geojson::{Feature, FeatureCollection, Geometry};

#[doc(inline)]
pub use pit::{reconstruct, reconstruct_with, PitPoint, PointMatch, ReconstructOptions};

#[doc(inline)]
pub use proj::{Converter, Crs, ProjError, WGS84};

#[doc(inline)]
pub use section::{cross_section, CrossSection, ProfileOptions, SectionError, SectionInput, SectionLine};
