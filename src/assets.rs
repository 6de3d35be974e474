//! CSS asset bundling for the static preview.

use anyhow::{Context, Result};
use std::{fs, path::Path};

const OUTLINE: &str = include_str!("../assets/outline.css");

/// Writes the bundled preview stylesheet to the assets directory.
///
/// Section documents are self-contained (inline style over host theme
/// variables), so only the outline index needs an external stylesheet.
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::write(assets_dir.join("outline.css"), OUTLINE)
        .with_context(|| "Failed to write CSS asset: outline.css")?;

    Ok(())
}
