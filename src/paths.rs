//! XDG-style path utilities for the configuration directory.
//!
//! XDG Base Directory conventions are preferred over OS-specific locations
//! so the config file lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for mary.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/mary` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/mary` otherwise
///
/// # Errors
///
/// Returns an error if neither is set and the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("mary")),
        _ => Ok(home_dir()?.join(".config").join("mary")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
