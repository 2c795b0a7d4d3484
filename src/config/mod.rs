// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use country_dial::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CountryDial";

/// Default quiet period after the last keystroke before a search runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Bounds for persisted debounce values so a hand-edited config cannot make
/// the search box feel broken (too twitchy or seemingly dead).
pub const MIN_DEBOUNCE_MS: u64 = 50;
pub const MAX_DEBOUNCE_MS: u64 = 2_000;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// Search debounce window in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            debounce_ms: Some(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// The effective debounce window, clamped to the supported range.
    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
            .unwrap_or(DEFAULT_DEBOUNCE_MS)
            .clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_default_debounce() {
        let config = Config::default();
        assert_eq!(config.debounce_ms(), DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.language, None);
    }

    #[test]
    fn debounce_is_clamped_to_supported_range() {
        let too_low = Config {
            language: None,
            debounce_ms: Some(1),
        };
        assert_eq!(too_low.debounce_ms(), MIN_DEBOUNCE_MS);

        let too_high = Config {
            language: None,
            debounce_ms: Some(60_000),
        };
        assert_eq!(too_high.debounce_ms(), MAX_DEBOUNCE_MS);
    }

    #[test]
    fn missing_debounce_falls_back_to_default() {
        let config = Config {
            language: Some("fr".into()),
            debounce_ms: None,
        };
        assert_eq!(config.debounce_ms(), DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let config = Config {
            language: Some("fr".to_string()),
            debounce_ms: Some(450),
        };
        save_to_path(&config, &path).expect("save");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_file_falls_back_to_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "language = [not toml").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");
        save_to_path(&Config::default(), &path).expect("save");
        assert!(path.exists());
    }
}
