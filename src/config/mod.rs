//! Configuration module for craving-lunch
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "CRAVING_LUNCH_SETTINGS_PATH";

/// Default settings file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("craving-lunch/settings.yml"));
    }
    paths
}

/// Load settings from an explicit path, the environment, a default location
/// or built-in defaults, then apply environment overrides and validate
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match find_settings_file(explicit)? {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn find_settings_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    // An explicit path must exist
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    Ok(default_paths().into_iter().find(|p| p.exists()))
}
