//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in
//! TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::APP_NAME;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Storage location configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Overrides the directory the card data file lives in.
    /// Defaults to the platform data directory when unset.
    pub data_dir: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the help overlay on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Cartela/config.toml`
/// - macOS: `~/Library/Application Support/Cartela/config.toml`
/// - Windows: `%APPDATA%\Cartela\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Storage location settings
    #[serde(default)]
    pub storage: StorageConfig,
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
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the platform-specific default data directory path.
    ///
    /// - Linux: `~/.local/share/Cartela/`
    /// - macOS: `~/Library/Application Support/Cartela/`
    /// - Windows: `%APPDATA%\Cartela\`
    pub fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Failed to determine data directory")?
            .join(APP_NAME);

        Ok(data_dir)
    }

    /// Resolves the effective data directory: the configured override if
    /// set, the platform default otherwise.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_data_dir(),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory: {}", config_dir.display())
        })?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &config_path).with_context(|| {
            format!(
                "Failed to rename temp config file to: {}",
                config_path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(!config.ui.show_help_on_startup);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let mut config = Config::new();
        config.storage.data_dir = Some(PathBuf::from("/tmp/cartela-test"));
        config.ui.theme_mode = ThemeMode::Light;

        let content = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_parses_partial_file() {
        // Missing sections and fields fall back to defaults
        let loaded: Config = toml::from_str("[ui]\nshow_help_on_startup = true\n").unwrap();
        assert!(loaded.ui.show_help_on_startup);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(loaded.storage.data_dir, None);

        let loaded: Config = toml::from_str("").unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_data_dir_prefers_override() {
        let mut config = Config::new();
        config.storage.data_dir = Some(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(config.data_dir().unwrap(), Path::new("/tmp/elsewhere"));
    }
}
