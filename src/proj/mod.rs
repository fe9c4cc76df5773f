//! Projection registry and cached coordinate conversion between WGS84 and
//! the UTM zones 46-57 (both hemispheres).
mod cache;
mod code;
mod converter;
mod error;

pub use code::{Crs, WGS84};
pub use converter::{Converter, DEFAULT_CACHE_CAPACITY};
pub use error::ProjError;
