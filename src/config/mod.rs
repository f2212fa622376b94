// SPDX-License-Identifier: MPL-2.0
//! This module handles the editor configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use highlight_reel::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.scroll_delay_ms = Some(150);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::JournalCapacity;
use crate::domain::ui::{MarkerWidth, ScrollDelay};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HighlightReel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HIGHLIGHT_REEL_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before the transcript list scrolls to a newly active sentence.
    #[serde(default)]
    pub scroll_delay_ms: Option<u64>,
    /// Minimum width of a selected-sentence marker on the progress bar.
    #[serde(default)]
    pub min_marker_width_percent: Option<f64>,
    /// Number of events kept in the diagnostics journal.
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
    /// Directory holding `<video stem>.json` transcripts. Defaults to the
    /// directory of the video itself.
    #[serde(default)]
    pub transcript_dir: Option<PathBuf>,
    /// Artificial latency added by the file transcriber.
    #[serde(default)]
    pub processing_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_delay_ms: Some(DEFAULT_SCROLL_DELAY_MS),
            min_marker_width_percent: Some(DEFAULT_MIN_MARKER_WIDTH_PERCENT),
            diagnostics_capacity: Some(DEFAULT_JOURNAL_CAPACITY),
            transcript_dir: None,
            processing_delay_ms: Some(DEFAULT_PROCESSING_DELAY_MS),
        }
    }
}

/// Validated values the editing session runs with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionSettings {
    pub scroll_delay: ScrollDelay,
    pub min_marker_width: MarkerWidth,
    pub journal_capacity: JournalCapacity,
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            scroll_delay: config
                .scroll_delay_ms
                .map(ScrollDelay::new)
                .unwrap_or_default(),
            min_marker_width: config
                .min_marker_width_percent
                .map(MarkerWidth::new)
                .unwrap_or_default(),
            journal_capacity: config
                .diagnostics_capacity
                .map(JournalCapacity::new)
                .unwrap_or_default(),
        }
    }
}

impl Config {
    /// Returns the clamped processing delay of the file transcriber.
    #[must_use]
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(
            self.processing_delay_ms
                .unwrap_or(DEFAULT_PROCESSING_DELAY_MS)
                .min(MAX_PROCESSING_DELAY_MS),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path).join(CONFIG_FILE));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location, or returns defaults
/// if no file exists yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`. Invalid TOML yields the defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "invalid_config_using_defaults");
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
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
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            scroll_delay_ms: Some(250),
            min_marker_width_percent: Some(1.0),
            diagnostics_capacity: Some(64),
            transcript_dir: Some(PathBuf::from("/srv/transcripts")),
            processing_delay_ms: Some(10),
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
    fn missing_fields_deserialize_as_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "scroll_delay_ms = 40\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.scroll_delay_ms, Some(40));
        assert!(loaded.transcript_dir.is_none());
        assert!(loaded.min_marker_width_percent.is_none());
    }

    #[test]
    fn session_settings_clamp_out_of_range_values() {
        let config = Config {
            scroll_delay_ms: Some(60_000),
            min_marker_width_percent: Some(-3.0),
            diagnostics_capacity: Some(1),
            transcript_dir: None,
            processing_delay_ms: None,
        };
        let settings = SessionSettings::from(&config);
        assert_eq!(settings.scroll_delay.millis(), MAX_SCROLL_DELAY_MS);
        assert_eq!(settings.min_marker_width.percent(), 0.0);
        assert_eq!(settings.journal_capacity.value(), MIN_JOURNAL_CAPACITY);
    }

    #[test]
    fn default_config_resolves_to_default_settings() {
        assert_eq!(
            SessionSettings::from(&Config::default()),
            SessionSettings::default()
        );
    }

    #[test]
    fn processing_delay_is_capped() {
        let config = Config {
            processing_delay_ms: Some(u64::MAX),
            ..Config::default()
        };
        assert_eq!(
            config.processing_delay(),
            Duration::from_millis(MAX_PROCESSING_DELAY_MS)
        );
    }
}
