// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration: compiled-in defaults that
//! can be overridden from an optional `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[media]` - Media source URL, title and duration hint
//! - `[playback]` - Skip step, idle timeout, polling interval, autoplay and
//!   which time string the overlay label shows
//! - `[diagnostics]` - Size of the in-memory event log
//!
//! Every field is optional. A missing file, section or field means the
//! compiled-in default from [`defaults`] is used.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to `load_with_override()` (CLI `--config-dir`, tests)
//! 2. `ICED_REEL_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory (via `dirs`)
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.playback.autoplay = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::video::{PollInterval, SkipStep};
use crate::error::{Error, Result};
use crate::ui::state::IdleTimeout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_REEL_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Which computed time string the overlay label displays.
///
/// Both strings are computed on every tick; this only selects the one the
/// user sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimeLabelMode {
    /// `HH:MM:SS` elapsed since the start of the media.
    #[default]
    Elapsed,
    /// `MM:SS` left until the end of the media.
    Remaining,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Media source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MediaConfig {
    /// Media URL (progressive MP4).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Title shown in the overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Duration the engine reports once metadata has loaded, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

/// Transport and overlay behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Forward/backward skip amount in seconds.
    #[serde(default = "default_skip_step_secs", skip_serializing_if = "Option::is_none")]
    pub skip_step_secs: Option<f64>,

    /// Seconds of inactivity before the controls hide.
    #[serde(
        default = "default_idle_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub idle_timeout_secs: Option<u32>,

    /// Position polling interval in milliseconds.
    #[serde(
        default = "default_poll_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub poll_interval_ms: Option<u32>,

    /// Start playback as soon as the screen appears.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Time string shown by the overlay label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_label: Option<TimeLabelMode>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_step_secs: default_skip_step_secs(),
            idle_timeout_secs: default_idle_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            autoplay: default_autoplay(),
            time_label: Some(TimeLabelMode::default()),
        }
    }
}

/// Diagnostics log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

/// Player configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Media source settings.
    #[serde(default)]
    pub media: MediaConfig,

    /// Transport and overlay settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Diagnostics log settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Media URL, falling back to the compiled-in source.
    pub fn media_url(&self) -> &str {
        self.media.url.as_deref().unwrap_or(DEFAULT_MEDIA_URL)
    }

    /// Media title, falling back to the compiled-in title.
    pub fn media_title(&self) -> &str {
        self.media.title.as_deref().unwrap_or(DEFAULT_MEDIA_TITLE)
    }

    /// Duration known before the engine reports it, if configured.
    pub fn media_duration_secs(&self) -> Option<f64> {
        self.media.duration_secs
    }

    pub fn skip_step(&self) -> SkipStep {
        self.playback
            .skip_step_secs
            .map(SkipStep::new)
            .unwrap_or_default()
    }

    pub fn idle_timeout(&self) -> IdleTimeout {
        self.playback
            .idle_timeout_secs
            .map(IdleTimeout::new)
            .unwrap_or_default()
    }

    pub fn poll_interval(&self) -> PollInterval {
        self.playback
            .poll_interval_ms
            .map(PollInterval::new)
            .unwrap_or_default()
    }

    pub fn autoplay(&self) -> bool {
        self.playback.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    pub fn time_label(&self) -> TimeLabelMode {
        self.playback.time_label.unwrap_or_default()
    }

    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_idle_timeout_secs() -> Option<u32> {
    Some(DEFAULT_IDLE_TIMEOUT_SECS)
}

fn default_poll_interval_ms() -> Option<u32> {
    Some(DEFAULT_POLL_INTERVAL_MS)
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the override and the env variable.
pub fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}: {}; using built-in defaults",
                            path.display(),
                            err
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_compiled_in_constants() {
        let config = Config::default();
        assert_eq!(config.media_url(), DEFAULT_MEDIA_URL);
        assert_eq!(config.media_title(), DEFAULT_MEDIA_TITLE);
        assert_eq!(config.skip_step().value(), DEFAULT_SKIP_STEP_SECS);
        assert_eq!(config.idle_timeout().value(), DEFAULT_IDLE_TIMEOUT_SECS);
        assert_eq!(config.poll_interval().value(), DEFAULT_POLL_INTERVAL_MS);
        assert!(config.autoplay());
        assert_eq!(config.time_label(), TimeLabelMode::Elapsed);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            media: MediaConfig {
                url: Some("https://example.com/clip.mp4".to_string()),
                title: Some("Clip".to_string()),
                duration_secs: Some(42.0),
            },
            playback: PlaybackConfig {
                skip_step_secs: Some(5.0),
                idle_timeout_secs: Some(3),
                poll_interval_ms: Some(50),
                autoplay: Some(false),
                time_label: Some(TimeLabelMode::Remaining),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[playback]\nautoplay = false\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert!(!loaded.autoplay());
        assert_eq!(loaded.skip_step().value(), DEFAULT_SKIP_STEP_SECS);
        assert_eq!(loaded.media_url(), DEFAULT_MEDIA_URL);
    }

    #[test]
    fn out_of_range_values_are_clamped_by_newtypes() {
        let config = Config {
            playback: PlaybackConfig {
                skip_step_secs: Some(500.0),
                idle_timeout_secs: Some(0),
                poll_interval_ms: Some(1),
                ..PlaybackConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.skip_step().value(), MAX_SKIP_STEP_SECS);
        assert_eq!(config.idle_timeout().value(), MIN_IDLE_TIMEOUT_SECS);
        assert_eq!(config.poll_interval().value(), MIN_POLL_INTERVAL_MS);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[playback\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(dir.clone())).expect("save");
        assert!(dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn diagnostics_capacity_defaults_and_clamps() {
        assert_eq!(
            Config::default().diagnostics_capacity().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );

        let config = Config {
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(1),
            },
            ..Config::default()
        };
        assert_eq!(
            config.diagnostics_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn time_label_mode_serializes_kebab_case() {
        let config = Config {
            playback: PlaybackConfig {
                time_label: Some(TimeLabelMode::Remaining),
                ..PlaybackConfig::default()
            },
            ..Config::default()
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("time_label = \"remaining\""));
    }
}
