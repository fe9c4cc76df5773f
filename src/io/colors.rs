//! Per-category colour overrides.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::block::CustomColors;

/// Reads `{ "<value>": { "color": "#rrggbb", "opacity": 0.5 } }` from a JSON file.
pub fn read_custom_colors(path: &Path) -> Result<CustomColors> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::colors::read] Failed to read colour file: {}", path.display()))?;
    parse_custom_colors(&text)
}

pub fn parse_custom_colors(text: &str) -> Result<CustomColors> {
    serde_json::from_str(text).context("[io::colors::read] Failed to parse colour overrides")
}
