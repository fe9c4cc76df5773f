use serde::Serialize;

use super::{elevation_profile, intersect_blocks, intersect_pits};
use super::{BlockSection, PitIntersection, ProfileOptions, ProfileSample, SectionLine};
use crate::block::Block;
use crate::elevation::{self, ElevationIndex, ElevationPoint};
use crate::geojson::{Feature, FeatureCollection};
use crate::proj::Converter;

/// Everything a cross-section is cut from.
#[derive(Clone, Copy, Debug)]
pub struct SectionInput<'a> {
    /// Prepared blocks (see [`crate::block::prepare_blocks`]), in `projection`.
    pub blocks: &'a [Block],
    /// The drawn line, a WGS84 LineString feature.
    pub line: &'a Feature,
    /// Survey elevation points, in `projection`.
    pub elevation: &'a [ElevationPoint],
    /// Reconstructed pit boundaries, WGS84.
    pub pits: &'a FeatureCollection,
    /// Source projection code of `blocks` and `elevation`.
    pub projection: &'a str,
    pub profile: ProfileOptions,
}

/// Blocks, pit crossings and terrain along a section line.
///
/// Each part is computed independently; a part that fails is left empty and
/// explained in `warnings` while the others are still returned.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossSection {
    #[serde(flatten)]
    pub section: BlockSection,
    pub elevation_profile: Vec<ProfileSample>,
    pub pit_intersections: Vec<PitIntersection>,
    pub warnings: Vec<String>,
}

impl CrossSection {
    fn empty(warning: String) -> Self {
        Self {
            section: BlockSection { blocks: Vec::new(), line_length: 0.0, start_point: [0.0; 2], end_point: [0.0; 2] },
            elevation_profile: Vec::new(),
            pit_intersections: Vec::new(),
            warnings: vec![warning],
        }
    }
}

/// Cut a cross-section. Never fails: problems are logged and reported as warnings.
pub fn cross_section(input: &SectionInput<'_>, converter: &mut Converter) -> CrossSection {
    let line = match SectionLine::from_feature(input.line) {
        Ok(line) => line,
        Err(e) => {
            log::warn!("[section] {e}");
            return CrossSection::empty(e.to_string());
        }
    };

    let mut warnings = Vec::new();

    let (section, skipped_blocks) = intersect_blocks(input.blocks, &line, input.projection, converter);
    let (pit_intersections, skipped_pits) = intersect_pits(input.pits, &line);
    warnings.extend(skipped_blocks.iter().chain(&skipped_pits).map(ToString::to_string));

    let elevation_profile = if input.elevation.is_empty() {
        Vec::new()
    } else {
        let points = elevation::to_wgs84(input.elevation, input.projection, converter);
        elevation_profile(&ElevationIndex::new(&points), &line, &input.profile).unwrap_or_else(|e| {
            log::warn!("[section::profile] {e}");
            warnings.push(format!("Elevation profile unavailable: {e}"));
            Vec::new()
        })
    };

    log::debug!(
        "[section] blocks={} pit_crossings={} samples={}",
        section.blocks.len(), pit_intersections.len(), elevation_profile.len()
    );

    CrossSection { section, elevation_profile, pit_intersections, warnings }
}
