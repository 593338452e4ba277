//! Static assets shipped with every generated site.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const STYLESHEET: &str = "nocco.css";
pub const SCRIPT: &str = "prettify.js";

const STYLESHEET_BODY: &str = include_str!("../assets/nocco.css");
const SCRIPT_BODY: &str = include_str!("../assets/prettify.js");

/// Write the stylesheet and highlighting script into `output_dir`, overwriting old copies.
pub fn write_assets(output_dir: &Path) -> Result<()> {
    for (name, body) in [(STYLESHEET, STYLESHEET_BODY), (SCRIPT, SCRIPT_BODY)] {
        let path = output_dir.join(name);
        fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "wrote asset");
    }
    Ok(())
}
