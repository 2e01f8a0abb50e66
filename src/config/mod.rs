// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo host's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Toast timing and layout constants live in [`defaults`] and are fixed at build
//! time; only host-level choices (anchor corner, icon font) are read from disk.
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config::{self, Config};
//! use iced_notify::ui::notifications::Anchor;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.anchor = Some(Anchor::TopLeft);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.anchor, Some(Anchor::TopLeft));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::Anchor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedNotify";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub anchor: Option<Anchor>,
    /// TTF/OTF file with the icon glyph range. Unicode fallbacks are used without it.
    #[serde(default)]
    pub icon_font: Option<PathBuf>,
    #[serde(default)]
    pub icon_size: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: Some(Anchor::default()),
            icon_font: None,
            icon_size: Some(DEFAULT_ICON_SIZE),
        }
    }
}

impl Config {
    /// Anchor corner, falling back to the default when unset.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor.unwrap_or_default()
    }

    /// Icon pixel size, falling back to [`DEFAULT_ICON_SIZE`] when unset.
    #[must_use]
    pub fn icon_size(&self) -> f32 {
        self.icon_size.unwrap_or(DEFAULT_ICON_SIZE)
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
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
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
    fn save_and_load_round_trip_preserves_anchor() {
        let config = Config {
            anchor: Some(Anchor::TopCenter),
            icon_font: Some(PathBuf::from("/usr/share/fonts/fa-solid-900.ttf")),
            icon_size: Some(20.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, crate::error::Error::Io(_)));
    }

    #[test]
    fn missing_fields_fall_back_to_accessor_defaults() {
        let config: Config = toml::from_str("").expect("empty toml is valid");
        assert_eq!(config.anchor(), Anchor::BottomRight);
        assert_eq!(config.icon_size(), DEFAULT_ICON_SIZE);
        assert!(config.icon_font.is_none());
    }

    #[test]
    fn anchor_is_written_in_kebab_case() {
        let config = Config {
            anchor: Some(Anchor::BottomLeft),
            ..Config::default()
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("anchor = \"bottom-left\""));
    }
}
