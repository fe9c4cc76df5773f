use anyhow::Result;
use serde_json::Map;

use crate::block::prepare_blocks;
use crate::cli::{Cli, SectionArgs};
use crate::geojson::{Feature, FeatureCollection, Geometry};
use crate::io::{csv::read_block_rows, json::write_json, string_file::{read_elevation_points, read_pit_points}};
use crate::pit::reconstruct;
use crate::section::{cross_section, ProfileOptions, SectionInput};

pub fn run(cli: &Cli, args: &SectionArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!(
            "[section] model={} from={:?} to={:?} -> {}",
            args.model.model.display(), args.from, args.to, args.out.output.display()
        );
    }

    let projection = args.out.projection.as_str();
    let mut converter = super::converter()?;

    let rows = read_block_rows(&args.model.model)?;
    let blocks = prepare_blocks(&rows, &super::process_options(&args.model)?);

    let pits = match &args.pit {
        Some(path) => reconstruct(&read_pit_points(path)?, projection, &mut converter),
        None => FeatureCollection::default(),
    };
    let elevation = match &args.elevation {
        Some(path) => read_elevation_points(path)?,
        None => Vec::new(),
    };

    let line = Feature::new(Geometry::LineString { coordinates: vec![args.from, args.to] }, Map::new());
    let input = SectionInput {
        blocks: &blocks,
        line: &line,
        elevation: &elevation,
        pits: &pits,
        projection,
        profile: ProfileOptions { samples: args.samples, search_radius: args.radius, ..Default::default() },
    };

    let result = cross_section(&input, &mut converter);
    for warning in &result.warnings {
        eprintln!("[section] warning: {warning}");
    }
    write_json(&args.out.output, &result, args.out.force)?;

    if cli.verbose > 0 {
        println!(
            "Wrote section with {} blocks, {} pit crossings -> {}",
            result.section.blocks.len(), result.pit_intersections.len(), args.out.output.display()
        );
    }
    Ok(())
}
