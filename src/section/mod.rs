//! Cross-section extraction along a user-drawn line.
//!
//! Block entry/exit offsets are planar distances in the line's own
//! coordinates. Pit crossings and profile samples carry geodesic metres.
//! The two are reported side by side and never converted into each other.
mod blocks;
mod engine;
mod error;
mod footprint;
mod line;
mod pits;
mod profile;

pub use blocks::{intersect_blocks, BlockSection, BlockSegment, Dimensions, SegmentProperties};
pub use engine::{cross_section, CrossSection, SectionInput};
pub use error::SectionError;
pub use line::SectionLine;
pub use pits::{intersect_pits, PitIntersection};
pub use profile::{elevation_profile, ProfileOptions, ProfileSample};
