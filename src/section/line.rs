use geo::Coord;
use sectgeom::planar_distance;

use super::SectionError;
use crate::geojson::{Feature, Geometry};

/// The straight section line, `[lng, lat]` endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLine {
    pub start: Coord<f64>,
    pub end: Coord<f64>,
}

impl SectionLine {
    pub fn new(start: [f64; 2], end: [f64; 2]) -> Result<Self, SectionError> {
        if !start.iter().chain(end.iter()).all(|v| v.is_finite()) {
            return Err(SectionError::InvalidLine(format!("non-finite endpoint {start:?} -> {end:?}")));
        }
        Ok(Self { start: start.into(), end: end.into() })
    }

    /// Use the first and last vertices of a drawn LineString.
    pub fn from_feature(feature: &Feature) -> Result<Self, SectionError> {
        let Geometry::LineString { coordinates } = &feature.geometry else {
            return Err(SectionError::InvalidLine("geometry is not a LineString".to_string()));
        };
        match (coordinates.first(), coordinates.last()) {
            (Some(start), Some(end)) if coordinates.len() >= 2 => Self::new(*start, *end),
            _ => Err(SectionError::InvalidLine(format!("{} vertices, need at least 2", coordinates.len()))),
        }
    }

    /// Planar length in the line's own units.
    #[inline]
    pub fn length(&self) -> f64 { planar_distance(self.start, self.end) }

    #[inline]
    pub fn as_line(&self) -> geo::Line<f64> { geo::Line::new(self.start, self.end) }

    #[inline] pub fn start_point(&self) -> [f64; 2] { self.start.into() }

    #[inline] pub fn end_point(&self) -> [f64; 2] { self.end.into() }
}
