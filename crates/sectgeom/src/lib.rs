//! Planar and geodesic primitives for cutting a section line through block
//! footprints and pit polylines.
//!
//! Two distance conventions live side by side and are never mixed:
//!
//! * [`planar_distance`] works in whatever linear space the coordinates are
//!   in (degrees for WGS84, metres for UTM). Block entry/exit offsets use it.
//! * [`geodesic_distance_meters`] treats coordinates as `[lng, lat]` degrees
//!   and returns great-circle metres. Pit crossings use it.

pub mod distance;
pub mod ring;
pub mod segment;

pub use distance::{geodesic_distance_meters, planar_distance, EARTH_RADIUS_M};
pub use ring::{point_in_ring, ring_centroid, ring_is_closed};
pub use segment::{interpolate, project_onto_segment, segment_intersection, Projection};
