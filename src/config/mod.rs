//! Configuration module for the relay
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "RELAY_SETTINGS_PATH";

/// Candidate settings file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/confluence-relay/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("confluence-relay/settings.yml"));
    }
    paths
}

/// Find the first settings file that exists, honoring the explicit path first
pub fn locate() -> Option<PathBuf> {
    std::env::var(SETTINGS_PATH_ENV)
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .chain(default_paths())
        .find(|path| path.exists())
}

/// Load settings from `path` (or defaults), then apply environment overrides
pub fn load_from(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}
