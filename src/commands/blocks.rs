use anyhow::Result;

use crate::block::{block_model_to_geojson, ProcessOptions};
use crate::cli::{BlocksArgs, Cli};
use crate::io::{csv::read_block_rows, json::write_json};

pub fn run(cli: &Cli, args: &BlocksArgs) -> Result<()> {
    if cli.verbose > 0 {
        eprintln!(
            "[blocks] model={} projection={} -> {}",
            args.model.model.display(), args.out.projection, args.out.output.display()
        );
    }

    let rows = read_block_rows(&args.model.model)?;
    let options = ProcessOptions { max_features: args.max_features, ..super::process_options(&args.model)? };
    let mut converter = super::converter()?;

    let view = block_model_to_geojson(&rows, &args.out.projection, &options, &mut converter);
    write_json(&args.out.output, &view.geojson, args.out.force)?;

    if cli.verbose > 0 {
        println!("Wrote {} block features -> {}", view.geojson.len(), args.out.output.display());
    }
    Ok(())
}
