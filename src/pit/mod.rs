//! Pit-boundary reconstruction: STR points grouped by elevation level and
//! walked into closed loops and open chains.
mod point;
mod reconstruct;

pub use point::PitPoint;
pub use reconstruct::{group_levels, reconstruct, reconstruct_with, Level, PointMatch, ReconstructOptions, PIT_BOUNDARY};
