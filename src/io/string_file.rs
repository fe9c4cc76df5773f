//! STR string-file parsing for pit boundaries and elevation surveys.
//!
//! Rows are comma separated. The first two lines are the file header and
//! axis record. A row whose first field is `0` separates strings, and a row
//! starting with `END` ends the data.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::elevation::ElevationPoint;
use crate::pit::PitPoint;

const HEADER_LINES: usize = 2;

/// Reads pit-boundary points from an STR file.
pub fn read_pit_points(path: &Path) -> Result<Vec<PitPoint>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::string_file::read] Failed to read STR file: {}", path.display()))?;
    Ok(parse_pit_points(&text))
}

/// Reads elevation points from an STR file.
pub fn read_elevation_points(path: &Path) -> Result<Vec<ElevationPoint>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::string_file::read] Failed to read STR file: {}", path.display()))?;
    Ok(parse_elevation_points(&text))
}

/// Parse `interior, x, y, z, none, type` rows. Non-numeric coordinates are
/// kept as `None`.
pub fn parse_pit_points(text: &str) -> Vec<PitPoint> {
    data_rows(text)
        .map(|fields| PitPoint {
            interior: text_field(&fields, 0),
            x: number_field(&fields, 1),
            y: number_field(&fields, 2),
            z: number_field(&fields, 3),
            none: text_field(&fields, 4),
            kind: text_field(&fields, 5),
        })
        .collect()
}

/// Parse `id, lat, lon, z, desc` rows. Rows without numeric coordinates are dropped.
pub fn parse_elevation_points(text: &str) -> Vec<ElevationPoint> {
    data_rows(text)
        .filter_map(|fields| Some(ElevationPoint {
            lat: number_field(&fields, 1)?,
            lon: number_field(&fields, 2)?,
            z: number_field(&fields, 3)?,
            id: text_field(&fields, 0),
            desc: text_field(&fields, 4),
        }))
        .collect()
}

fn data_rows(text: &str) -> impl Iterator<Item = Vec<&str>> {
    text.lines()
        .skip(HEADER_LINES)
        .map(str::trim)
        .take_while(|line| !line.to_ascii_uppercase().starts_with("END"))
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(str::trim).collect::<Vec<_>>())
        .filter(|fields| fields.first().is_some_and(|first| *first != "0"))
}

fn number_field(fields: &[&str], idx: usize) -> Option<f64> {
    fields.get(idx)?.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn text_field(fields: &[&str], idx: usize) -> Option<String> {
    fields.get(idx).filter(|s| !s.is_empty()).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIT: &str = "\
pit_design,15-Mar-24,,
0, 0.000, 0.000, 0.000, 0.000, 0.000, 0.000
1, 500000.0, 9000000.0, 50.0, , crest
1, 500010.0, 9000000.0, 50.0, , crest
1, bad, 9000010.0, 50.0, , crest
0, 0.000, 0.000, 0.000,
2, 500000.0, 9000000.0, 40.0
0, 0.000, 0.000, 0.000,
0, 0.000, 0.000, 0.000, END
";

    #[test]
    fn pit_rows_skip_header_and_separators() {
        let points = parse_pit_points(PIT);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].xyz(), Some([500000.0, 9000000.0, 50.0]));
        assert_eq!(points[0].interior.as_deref(), Some("1"));
        assert_eq!(points[0].none, None);
        assert_eq!(points[0].kind.as_deref(), Some("crest"));
        assert_eq!(points[2].x, None);
        assert_eq!(points[3].z, Some(40.0));
        assert_eq!(points[3].kind, None);
    }

    #[test]
    fn stops_at_end_marker() {
        let text = "header\naxis\n1, 1.0, 2.0, 3.0\nEND\n1, 4.0, 5.0, 6.0\n";
        assert_eq!(parse_pit_points(text).len(), 1);
    }

    #[test]
    fn elevation_rows() {
        let text = "survey\naxis\n7, -9.5, 129.25, 312.4, spot\n8, -9.5, x, 1.0\n";
        let points = parse_elevation_points(text);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].lat, -9.5);
        assert_eq!(points[0].lon, 129.25);
        assert_eq!(points[0].z, 312.4);
        assert_eq!(points[0].id.as_deref(), Some("7"));
        assert_eq!(points[0].desc.as_deref(), Some("spot"));
    }
}
