pub mod blocks;
pub mod elevation;
pub mod pit;
pub mod section;

use anyhow::{Context, Result};

use crate::block::ProcessOptions;
use crate::cli::BlockModelArgs;
use crate::io::colors::read_custom_colors;
use crate::proj::Converter;

/// Build processing options from the shared block-model arguments.
pub(crate) fn process_options(args: &BlockModelArgs) -> Result<ProcessOptions> {
    let custom_colors = args.colors.as_deref().map(read_custom_colors).transpose()?;
    Ok(ProcessOptions {
        attribute_key: args.attribute.clone(),
        top_elevation_only: args.top_only,
        custom_colors,
        default_dim: args.default_dim,
        ..Default::default()
    })
}

pub(crate) fn converter() -> Result<Converter> {
    Converter::new().context("[commands] Failed to build projection registry")
}
