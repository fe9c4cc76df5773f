use anyhow::Result;

use crate::cli::{Cli, ElevationArgs};
use crate::elevation::to_feature_collection;
use crate::io::{json::write_json, string_file::read_elevation_points};

pub fn run(cli: &Cli, args: &ElevationArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!(
            "[elevation] input={} projection={} -> {}",
            args.input.display(), args.out.projection, args.out.output.display()
        );
    }

    let points = read_elevation_points(&args.input)?;
    let mut converter = super::converter()?;
    let fc = to_feature_collection(&points, &args.out.projection, &mut converter);
    write_json(&args.out.output, &fc, args.out.force)?;

    if cli.verbose > 0 {
        println!("Wrote {} elevation points -> {}", fc.len(), args.out.output.display());
    }
    Ok(())
}
