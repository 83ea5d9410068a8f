// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences and backend connection details to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[backend]` - Store endpoint, API key, table name and timeouts
//! - `[display]` - Thumbnail cache sizing
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument, then `GALLERY_ADMIN_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Environment Overrides
//!
//! `GALLERY_ADMIN_BACKEND_URL` and `GALLERY_ADMIN_API_KEY` take precedence over
//! the `[backend]` values from the file, so secrets can stay out of it.
//!
//! # Examples
//!
//! ```no_run
//! use gallery_admin::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("table: {}", config.backend.table());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[backend] url`.
pub const ENV_BACKEND_URL: &str = "GALLERY_ADMIN_BACKEND_URL";

/// Environment variable overriding `[backend] api_key`.
pub const ENV_API_KEY: &str = "GALLERY_ADMIN_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Remote store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BackendConfig {
    /// Project base URL (e.g., `https://project.example.co`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public API key sent as `apikey` and bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Table holding gallery rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Whole-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Connection timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
}

impl BackendConfig {
    /// Table name, falling back to [`DEFAULT_TABLE`] when unset or blank.
    #[must_use]
    pub fn table(&self) -> &str {
        self.table
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TABLE)
    }

    /// Request timeout, clamped to `1..=MAX_TIMEOUT_SECS`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        clamp_timeout(self.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Connect timeout, clamped to `1..=MAX_TIMEOUT_SECS`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        clamp_timeout(self.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

fn clamp_timeout(value: Option<u64>, default: u64) -> Duration {
    Duration::from_secs(value.unwrap_or(default).clamp(1, MAX_TIMEOUT_SECS))
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Number of decoded thumbnails kept in memory.
    #[serde(
        default = "default_thumbnail_cache_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_cache_size: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thumbnail_cache_size: default_thumbnail_cache_size(),
        }
    }
}

impl DisplayConfig {
    /// Cache size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_cache_size(&self) -> usize {
        self.thumbnail_cache_size
            .unwrap_or(DEFAULT_THUMBNAIL_CACHE_SIZE)
            .clamp(MIN_THUMBNAIL_CACHE_SIZE, MAX_THUMBNAIL_CACHE_SIZE)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_cache_size() -> Option<usize> {
    Some(DEFAULT_THUMBNAIL_CACHE_SIZE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Environment Overrides
// =============================================================================

/// Applies `GALLERY_ADMIN_*` environment variables on top of `config`.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

/// Applies overrides read through `lookup`; empty values are ignored.
pub fn apply_overrides_from(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty(ENV_BACKEND_URL) {
        config.backend.url = Some(url);
    }
    if let Some(key) = non_empty(ENV_API_KEY) {
        config.backend.api_key = Some(key);
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path, then applies environment
/// overrides.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    let (mut config, warning) = load_with_override(None);
    apply_env_overrides(&mut config);
    (config, warning)
}

/// Loads the configuration from a custom directory. No environment overrides
/// are applied.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "could not read settings, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            backend: BackendConfig {
                url: Some("https://project.example.co".into()),
                api_key: Some("anon-key".into()),
                table: Some("posters".into()),
                request_timeout_secs: Some(12),
                connect_timeout_secs: None,
            },
            display: DisplayConfig {
                thumbnail_cache_size: Some(16),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[backend\nurl = ").expect("write failed");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[backend]\nurl = \"https://x.example.co\"\n").unwrap();
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.backend.table(), DEFAULT_TABLE);
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write failed");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let mut config = Config::default();
        config.backend.url = Some("https://file.example.co".into());
        config.backend.api_key = Some("file-key".into());

        let env: HashMap<&str, &str> = [
            (ENV_BACKEND_URL, "https://env.example.co"),
            (ENV_API_KEY, "   "),
        ]
        .into_iter()
        .collect();
        apply_overrides_from(&mut config, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.backend.url.as_deref(), Some("https://env.example.co"));
        // Blank values do not override.
        assert_eq!(config.backend.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn timeouts_and_cache_size_are_clamped() {
        let backend = BackendConfig {
            request_timeout_secs: Some(0),
            connect_timeout_secs: Some(10_000),
            ..BackendConfig::default()
        };
        assert_eq!(backend.request_timeout(), Duration::from_secs(1));
        assert_eq!(backend.connect_timeout(), Duration::from_secs(MAX_TIMEOUT_SECS));

        let display = DisplayConfig {
            thumbnail_cache_size: Some(0),
        };
        assert_eq!(display.thumbnail_cache_size(), MIN_THUMBNAIL_CACHE_SIZE);
    }

    #[test]
    fn blank_table_uses_default() {
        let backend = BackendConfig {
            table: Some("  ".into()),
            ..BackendConfig::default()
        };
        assert_eq!(backend.table(), DEFAULT_TABLE);
    }
}
