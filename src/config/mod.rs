// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving the
//! toast queue settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Keep up to three toasts on screen
//! config.toast.limit = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.toast.limit, Some(3));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::toast::{RemoveDelay, ToastLimit};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastQueue";

/// Top-level settings file layout.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastSettings,
}

/// `[toast]` section of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastSettings {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub remove_delay_ms: Option<u64>,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_TOAST_LIMIT),
            remove_delay_ms: Some(DEFAULT_REMOVE_DELAY_MS),
        }
    }
}

impl ToastSettings {
    /// Returns the validated queue limit, falling back to the default.
    #[must_use]
    pub fn limit(&self) -> ToastLimit {
        self.limit.map(ToastLimit::new).unwrap_or_default()
    }

    /// Returns the validated removal delay, falling back to the default.
    #[must_use]
    pub fn remove_delay(&self) -> RemoveDelay {
        self.remove_delay_ms
            .map(RemoveDelay::from_millis)
            .unwrap_or_default()
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
            tracing::warn!(path = %path.display(), error = %err, "Invalid settings file, using defaults");
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
    use crate::domain::toast::{limit_bounds, remove_delay_bounds};
    use tempfile::tempdir;

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(limit_bounds::MIN, MIN_TOAST_LIMIT);
        assert_eq!(limit_bounds::DEFAULT, DEFAULT_TOAST_LIMIT);
        assert_eq!(remove_delay_bounds::MIN_MS, MIN_REMOVE_DELAY_MS);
        assert_eq!(remove_delay_bounds::MAX_MS, MAX_REMOVE_DELAY_MS);
        assert_eq!(remove_delay_bounds::DEFAULT_MS, DEFAULT_REMOVE_DELAY_MS);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast: ToastSettings {
                limit: Some(4),
                remove_delay_ms: Some(250),
            },
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
    fn load_from_path_fills_missing_section_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write empty file");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toast.limit(), ToastLimit::new(DEFAULT_TOAST_LIMIT));
        assert_eq!(
            loaded.toast.remove_delay(),
            RemoveDelay::from_millis(DEFAULT_REMOVE_DELAY_MS)
        );
    }

    #[test]
    fn load_from_path_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let settings = ToastSettings {
            limit: Some(0),
            remove_delay_ms: Some(u64::MAX),
        };
        assert_eq!(settings.limit().value(), MIN_TOAST_LIMIT);
        assert_eq!(settings.remove_delay().as_millis(), MAX_REMOVE_DELAY_MS);
    }

    #[test]
    fn unset_fields_use_defaults() {
        let settings = ToastSettings {
            limit: None,
            remove_delay_ms: None,
        };
        assert_eq!(settings.limit().value(), DEFAULT_TOAST_LIMIT);
        assert_eq!(settings.remove_delay().as_millis(), DEFAULT_REMOVE_DELAY_MS);
    }
}
