use geo::Coord;
use sectgeom::{planar_distance, point_in_ring, project_onto_segment, ring_centroid, segment_intersection};
use serde::Serialize;

use super::footprint::{candidates, Footprint};
use super::{SectionError, SectionLine};
use crate::block::{build_ring, Block};
use crate::proj::{Converter, WGS84};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentProperties {
    pub rock: String,
    pub color: Option<String>,
}

/// One block cut by the section line. `distance` and `width` are planar, in
/// the line's coordinate units.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSegment {
    /// `[lng, lat, z]`.
    pub centroid: [f64; 3],
    pub dimensions: Dimensions,
    pub properties: SegmentProperties,
    /// Offset of the entry point from the line start.
    pub distance: f64,
    /// Chord length between entry and exit.
    pub width: f64,
    pub elevation: f64,
    /// Footprint centroid projected onto the line.
    pub projected_point: [f64; 2],
    pub entry_point: [f64; 2],
    pub exit_point: [f64; 2],
}

/// Blocks along the line, ordered by entry distance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSection {
    pub blocks: Vec<BlockSegment>,
    /// Planar length of the line.
    pub line_length: f64,
    pub start_point: [f64; 2],
    pub end_point: [f64; 2],
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Hit {
    point: Coord<f64>,
    distance: f64,
}

/// Cut every block footprint with the section line.
///
/// Footprints are built in WGS84 and filtered by bounding box before the
/// exact test. Blocks without numeric geometry or with a malformed ring are
/// skipped; the reasons are logged and returned alongside the section.
pub fn intersect_blocks(
    blocks: &[Block],
    line: &SectionLine,
    projection: &str,
    converter: &mut Converter,
) -> (BlockSection, Vec<SectionError>) {
    let mut skipped = Vec::new();
    let mut shapes: Vec<(usize, Shape, Vec<Coord<f64>>)> = Vec::new();
    for (index, block) in blocks.iter().enumerate() {
        let shaped = Shape::of(index, block).and_then(|shape| {
            let ring = shape.ring(projection, converter);
            validate_ring(index, &ring).map(|()| (index, shape, ring))
        });
        match shaped {
            Ok(entry) => shapes.push(entry),
            Err(e) => {
                log::warn!("[section::blocks] {e}");
                skipped.push(e);
            }
        }
    }

    let footprints = shapes.iter().enumerate()
        .filter_map(|(i, (_, _, ring))| Footprint::new(i, ring))
        .collect();

    let mut segments = Vec::new();
    for i in candidates(footprints, line.start, line.end) {
        let (index, shape, ring) = &shapes[i];
        let Some((entry, exit)) = cut_ring(ring, line) else { continue };
        let Some(centroid) = ring_centroid(ring) else { continue };
        segments.push(shape.segment(&blocks[*index], centroid, line, entry, exit, projection, converter));
    }

    segments.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    log::debug!(
        "[section::blocks] {} of {} blocks on the line, {} skipped",
        segments.len(), blocks.len(), skipped.len()
    );

    let section = BlockSection {
        blocks: segments,
        line_length: line.length(),
        start_point: line.start_point(),
        end_point: line.end_point(),
    };
    (section, skipped)
}

/// Numeric geometry of a block, checked once before any cutting.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Shape {
    centroid: [f64; 3],
    dimensions: [f64; 3],
}

impl Shape {
    fn of(index: usize, block: &Block) -> Result<Self, SectionError> {
        let fields = [
            ("centroid_x", block.centroid_x),
            ("centroid_y", block.centroid_y),
            ("centroid_z", block.centroid_z),
            ("dim_x", block.dim_x),
            ("dim_y", block.dim_y),
            ("dim_z", block.dim_z),
        ];
        let mut values = [0.0; 6];
        for (slot, (field, value)) in values.iter_mut().zip(fields) {
            *slot = value.filter(|v| v.is_finite()).ok_or(SectionError::MissingGeometry { index, field })?;
        }
        let [x, y, z, dx, dy, dz] = values;
        Ok(Self { centroid: [x, y, z], dimensions: [dx, dy, dz] })
    }

    /// Footprint in WGS84, converting corners one by one.
    fn ring(&self, projection: &str, converter: &mut Converter) -> Vec<Coord<f64>> {
        let [x, y, _] = self.centroid;
        let [dx, dy, _] = self.dimensions;
        build_ring(x, y, dx, dy).into_iter()
            .map(|corner| if projection == WGS84 { corner } else { converter.to_wgs84(corner, projection) })
            .map(Coord::from)
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn segment(
        &self,
        block: &Block,
        footprint_centroid: Coord<f64>,
        line: &SectionLine,
        entry: Hit,
        exit: Hit,
        projection: &str,
        converter: &mut Converter,
    ) -> BlockSegment {
        let [x, y, z] = self.centroid;
        let [dx, dy, dz] = self.dimensions;
        let [lng, lat] = converter.to_wgs84([x, y], projection);
        let projected = project_onto_segment(footprint_centroid, line.start, line.end);

        BlockSegment {
            centroid: [lng, lat, z],
            dimensions: Dimensions { x: dx, y: dy, z: dz },
            properties: SegmentProperties { rock: block.attribute_value.clone(), color: block.color.clone() },
            distance: entry.distance,
            width: exit.distance - entry.distance,
            elevation: z,
            projected_point: projected.point.into(),
            entry_point: entry.point.into(),
            exit_point: exit.point.into(),
        }
    }
}

fn validate_ring(index: usize, ring: &[Coord<f64>]) -> Result<(), SectionError> {
    let malformed = |reason: String| SectionError::MalformedRing { index, reason };
    if ring.len() < 4 {
        return Err(malformed(format!("{} vertices, need at least 4", ring.len())));
    }
    if !ring.iter().all(|c| c.x.is_finite() && c.y.is_finite()) {
        return Err(malformed("non-finite vertex".to_string()));
    }
    Ok(())
}

/// Entry and exit of the line through a ring, or `None` when they don't meet.
///
/// Edge crossings are measured from the line start. With fewer than two
/// crossings, a line endpoint inside the ring stands in for the missing one
/// (at distance 0 for the start, the full length for the end).
fn cut_ring(ring: &[Coord<f64>], line: &SectionLine) -> Option<(Hit, Hit)> {
    let (start, end) = (line.start, line.end);

    let mut hits: Vec<Hit> = ring.windows(2)
        .filter_map(|edge| segment_intersection(start, end, edge[0], edge[1]))
        .map(|point| Hit { point, distance: planar_distance(start, point) })
        .collect();

    if hits.len() < 2 {
        if point_in_ring(start, ring) { hits.push(Hit { point: start, distance: 0.0 }) }
        if point_in_ring(end, ring) { hits.push(Hit { point: end, distance: line.length() }) }
    }

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Some((*hits.first()?, *hits.last()?))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::block::{FieldResolver, Row};
    use serde_json::json;

    fn c(x: f64, y: f64) -> Coord<f64> { Coord { x, y } }

    fn unit_ring() -> Vec<Coord<f64>> {
        vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0), c(0.0, 0.0)]
    }

    fn block(x: f64, y: f64, z: f64, rock: &str) -> Block {
        let row: Row = json!({ "x": x, "y": y, "z": z, "dim_x": 1.0, "dim_y": 1.0, "dim_z": 2.0, "rock": rock })
            .as_object().cloned().unwrap();
        FieldResolver::resolve(&row, "rock", 1.0).normalize(&row)
    }

    #[test]
    fn full_crossing_has_entry_before_exit() {
        let line = SectionLine::new([-1.0, 0.5], [2.0, 0.5]).unwrap();
        let (entry, exit) = cut_ring(&unit_ring(), &line).unwrap();
        assert_relative_eq!(entry.distance, 1.0);
        assert_relative_eq!(exit.distance, 2.0);
        assert!(exit.distance - entry.distance > 0.0);
        assert_eq!(entry.point, c(0.0, 0.5));
        assert_eq!(exit.point, c(1.0, 0.5));
    }

    #[test]
    fn line_starting_inside_uses_start_point() {
        let line = SectionLine::new([0.5, 0.5], [3.0, 0.5]).unwrap();
        let (entry, exit) = cut_ring(&unit_ring(), &line).unwrap();
        assert_eq!(entry.distance, 0.0);
        assert_eq!(entry.point, c(0.5, 0.5));
        assert_relative_eq!(exit.distance, 0.5);
    }

    #[test]
    fn line_ending_inside_uses_end_point() {
        let line = SectionLine::new([-1.0, 0.5], [0.25, 0.5]).unwrap();
        let (entry, exit) = cut_ring(&unit_ring(), &line).unwrap();
        assert_relative_eq!(entry.distance, 1.0);
        assert_relative_eq!(exit.distance, 1.25);
        assert_eq!(exit.point, c(0.25, 0.5));
    }

    #[test]
    fn line_fully_inside_spans_whole_length() {
        let line = SectionLine::new([0.25, 0.5], [0.75, 0.5]).unwrap();
        let (entry, exit) = cut_ring(&unit_ring(), &line).unwrap();
        assert_eq!(entry.distance, 0.0);
        assert_relative_eq!(exit.distance, 0.5);
    }

    #[test]
    fn missing_line_has_no_cut() {
        let line = SectionLine::new([-1.0, 3.0], [2.0, 3.0]).unwrap();
        assert!(cut_ring(&unit_ring(), &line).is_none());
    }

    #[test]
    fn malformed_rings_are_rejected() {
        assert!(validate_ring(0, &unit_ring()).is_ok());
        assert!(matches!(validate_ring(4, &unit_ring()[..3]), Err(SectionError::MalformedRing { index: 4, .. })));
        let mut ring = unit_ring();
        ring[2].x = f64::NAN;
        assert!(validate_ring(0, &ring).is_err());
    }

    #[test]
    fn segments_sorted_by_distance() {
        let mut converter = Converter::new().unwrap();
        let blocks = vec![
            block(5.5, 0.5, 30.0, "waste"),
            block(1.5, 0.5, 10.0, "ore"),
            block(1.5, 5.5, 20.0, "off-line"),
        ];
        let line = SectionLine::new([0.0, 0.5], [8.0, 0.5]).unwrap();
        let (section, skipped) = intersect_blocks(&blocks, &line, WGS84, &mut converter);

        assert!(skipped.is_empty());
        assert_eq!(section.blocks.len(), 2);
        assert_eq!(section.line_length, 8.0);
        let first = &section.blocks[0];
        assert_eq!(first.properties.rock, "ore");
        assert_relative_eq!(first.distance, 1.0);
        assert_relative_eq!(first.width, 1.0);
        assert_eq!(first.elevation, 10.0);
        assert_eq!(first.centroid, [1.5, 0.5, 10.0]);
        assert_relative_eq!(first.projected_point[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(first.projected_point[1], 0.5, epsilon = 1e-12);
        assert_eq!(first.dimensions, Dimensions { x: 1.0, y: 1.0, z: 2.0 });
        assert_eq!(section.blocks[1].properties.rock, "waste");
    }

    #[test]
    fn no_blocks_on_line() {
        let mut converter = Converter::new().unwrap();
        let blocks = vec![block(100.0, 100.0, 0.0, "ore")];
        let line = SectionLine::new([0.0, 0.0], [3.0, 4.0]).unwrap();
        let (section, skipped) = intersect_blocks(&blocks, &line, WGS84, &mut converter);
        assert!(section.blocks.is_empty());
        assert!(skipped.is_empty());
        assert_eq!(section.line_length, 5.0);
        assert_eq!(section.start_point, [0.0, 0.0]);
        assert_eq!(section.end_point, [3.0, 4.0]);
    }

    fn block_with(overrides: serde_json::Value) -> Block {
        let mut row: Row = json!({ "x": 1.5, "y": 0.5, "z": 0.0, "dim_x": 1.0, "dim_y": 1.0, "dim_z": 2.0, "rock": "ore" })
            .as_object().cloned().unwrap();
        row.extend(overrides.as_object().cloned().unwrap());
        FieldResolver::resolve(&row, "rock", 1.0).normalize(&row)
    }

    #[test]
    fn non_numeric_extent_is_reported() {
        let mut converter = Converter::new().unwrap();
        let blocks = vec![block_with(json!({ "dim_x": "wide" })), block(5.5, 0.5, 0.0, "waste")];
        let line = SectionLine::new([0.0, 0.5], [8.0, 0.5]).unwrap();

        let (section, skipped) = intersect_blocks(&blocks, &line, WGS84, &mut converter);
        assert_eq!(section.blocks.len(), 1);
        assert_eq!(section.blocks[0].properties.rock, "waste");
        assert_eq!(skipped, vec![SectionError::MissingGeometry { index: 0, field: "dim_x" }]);
    }

    #[test]
    fn non_numeric_height_is_skipped_not_defaulted() {
        let mut converter = Converter::new().unwrap();
        let blocks = vec![block_with(json!({ "dim_z": "n/a" }))];
        let line = SectionLine::new([0.0, 0.5], [8.0, 0.5]).unwrap();

        let (section, skipped) = intersect_blocks(&blocks, &line, WGS84, &mut converter);
        assert!(section.blocks.is_empty());
        assert_eq!(skipped, vec![SectionError::MissingGeometry { index: 0, field: "dim_z" }]);
    }
}
