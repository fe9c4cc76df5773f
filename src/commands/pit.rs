use anyhow::{ensure, Result};

use crate::cli::{Cli, PitArgs};
use crate::io::{json::write_json, string_file::read_pit_points};
use crate::pit::{reconstruct_with, PointMatch, ReconstructOptions};

pub fn run(cli: &Cli, args: &PitArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!(
            "[pit] input={} projection={} -> {}",
            args.input.display(), args.out.projection, args.out.output.display()
        );
    }

    let matching = match args.tolerance {
        Some(eps) => {
            ensure!(eps.is_finite() && eps >= 0.0, "tolerance must be a non-negative number, got {eps}");
            PointMatch::Tolerance(eps)
        }
        None => PointMatch::Exact,
    };

    let points = read_pit_points(&args.input)?;
    let mut converter = super::converter()?;
    let fc = reconstruct_with(&points, &args.out.projection, &mut converter, &ReconstructOptions { matching });
    write_json(&args.out.output, &fc, args.out.force)?;

    if cli.verbose > 0 {
        println!("Wrote {} pit boundaries from {} points -> {}", fc.len(), points.len(), args.out.output.display());
    }
    Ok(())
}
