//! JSON / GeoJSON output.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::common::ensure_writable;

/// Write `value` as pretty JSON, refusing to overwrite unless `force` is set.
pub fn write_json<T: Serialize>(path: &Path, value: &T, force: bool) -> Result<()> {
    ensure_writable(path, force)?;

    let file = File::create(path)
        .with_context(|| format!("[io::json::write] Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("[io::json::write] Failed to write JSON to {}", path.display()))
}
