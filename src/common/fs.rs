use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Create the parent directory of `path` if it doesn't exist.
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else { return Ok(()) };
    if parent.as_os_str().is_empty() { return Ok(()) }

    if parent.exists() {
        if !parent.is_dir() {
            bail!("Path exists but is not a directory: {}", parent.display());
        }
    } else {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Error if `path` already exists and `force` is not set.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path == Path::new("-") { bail!("stdout is not supported.") }
    if path.exists() && !force {
        bail!("Output already exists (use --force to overwrite): {}", path.display());
    }
    ensure_parent_exists(path)
}
