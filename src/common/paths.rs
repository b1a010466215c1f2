use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Centralized path management for KunsCLI
/// This module provides a single source of truth for all application paths

/// Get the main kuns config directory
pub fn kuns_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("kuns");

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating config directory at {}", config_dir.display()))?;

    Ok(config_dir)
}

/// Log file written by the wallpaper setup procedure, append-only.
pub fn wallpaper_setup_log(home: &Path) -> PathBuf {
    home.join(".wallpaper-setup.log")
}

/// Single-instance marker for the wallpaper setup procedure.
pub fn wallpaper_setup_lock(home: &Path) -> PathBuf {
    home.join(".wallpaper-setup.lock")
}
