//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution. It also resolves
//! the base address used for all remote API calls: a persisted override wins,
//! otherwise the built-in default applies.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_API_URL;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Cycles to the next mode (Auto -> Dark -> Light -> Auto).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Auto => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
        }
    }
}

/// Remote API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base address override for the task API (e.g. "<https://api.example.com>").
    /// When absent or empty, the built-in default is used.
    pub base_url: Option<String>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Display the help overlay hint on startup
    #[serde(default = "default_true")]
    pub show_help_hint: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_help_hint: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/hriselink/config.toml`
/// - macOS: `~/Library/Application Support/hriselink/config.toml`
/// - Windows: `%APPDATA%\hriselink\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("hriselink");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the full path to the diagnostic log file.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("console.log"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the platform config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// The base URL override, when set and non-empty, must look like an
    /// http(s) origin. An empty override is legal and means "use default".
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url {
            let trimmed = url.trim();
            if !trimmed.is_empty()
                && !trimmed.starts_with("http://")
                && !trimmed.starts_with("https://")
            {
                anyhow::bail!("api.base_url must start with http:// or https://: {url}");
            }
        }

        Ok(())
    }

    /// Resolves the base address for all remote API calls.
    ///
    /// Returns the persisted override verbatim (trailing slash stripped) when
    /// present and non-empty, otherwise the built-in default. Pure read.
    #[must_use]
    pub fn resolve_base_url(&self) -> String {
        match &self.api.base_url {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => DEFAULT_API_URL.to_string(),
        }
    }
}

/// Re-reads the config file and resolves the base address.
///
/// Command invocations call this instead of caching a `Config` so that an
/// edited override takes effect without restarting the console.
pub fn resolve_base_url_fresh() -> Result<String> {
    Ok(Config::load()?.resolve_base_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(config.ui.show_help_hint);
    }

    #[test]
    fn test_resolve_base_url_default() {
        let config = Config::new();
        assert_eq!(config.resolve_base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_base_url_override() {
        let mut config = Config::new();
        config.api.base_url = Some("https://api.example.com".to_string());
        assert_eq!(config.resolve_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_resolve_base_url_strips_trailing_slash() {
        let mut config = Config::new();
        config.api.base_url = Some("https://api.example.com/".to_string());
        assert_eq!(config.resolve_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_resolve_base_url_empty_override_falls_back() {
        let mut config = Config::new();
        config.api.base_url = Some(String::new());
        assert_eq!(config.resolve_base_url(), DEFAULT_API_URL);

        config.api.base_url = Some("   ".to_string());
        assert_eq!(config.resolve_base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = Config::new();
        config.api.base_url = Some("ftp://files.example.com".to_string());
        assert!(config.validate().is_err());

        config.api.base_url = Some("http://localhost:9090".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.api.base_url = Some("http://10.0.0.5:8080".to_string());
        config.ui.theme_mode = ThemeMode::Dark;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        // No stray temp file left behind
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_theme_mode_cycle() {
        assert_eq!(ThemeMode::Auto.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Auto);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme_mode = \"light\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert_eq!(config.api.base_url, None);
    }
}
