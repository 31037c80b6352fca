//! Command handler modules for mdg.
//!
//! Shared helpers live here; command-specific logic lives in the submodules.

pub mod calendar;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mdg_config::{GateSettings, ProjectLayout};

/// Resolve a path against the current directory. The path need not exist.
pub fn absolutize(p: &Path) -> Result<PathBuf> {
    if p.is_absolute() {
        return Ok(p.to_path_buf());
    }
    let cwd = std::env::current_dir().context("read current directory failed")?;
    Ok(cwd.join(p))
}

/// Calendar artifact path for an optional `--calendar` override.
pub fn calendar_path(
    layout: &ProjectLayout,
    settings: &GateSettings,
    name: Option<&str>,
) -> PathBuf {
    layout.calendar_path(name.unwrap_or(&settings.calendar_name))
}
