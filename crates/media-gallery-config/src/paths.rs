//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/media-gallery/`
//! - macOS: `~/Library/Application Support/media-gallery/`
//! - Windows: `%APPDATA%\media-gallery\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "media-gallery";

/// Get the application config directory
///
/// The directory is not created; a missing directory simply means no
/// config file has been written yet.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
