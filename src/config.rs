//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the stored map settings
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{AppSettings, MapController, StyleSheet};

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "MapStylePicker";

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

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/MapStylePicker/config.toml`
/// - macOS: `~/Library/Application Support/MapStylePicker/config.toml`
/// - Windows: `%APPDATA%\MapStylePicker\config.toml`
///
/// # Validation
///
/// - the stored color must be empty or one of the style's colors
/// - bike and walking overlays must not both be on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Selected map style
    #[serde(default)]
    pub style: StyleSheet,
    /// Overlay flags
    #[serde(default)]
    pub overlays: MapController,
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
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.style.accepts_color(&self.style.current_color) {
            anyhow::bail!(
                "Color '{}' is not available for style '{}'",
                self.style.current_color,
                self.style.kind()
            );
        }

        if self.overlays.has_conflicting_paths() {
            anyhow::bail!("Bike and walking overlays cannot both be enabled");
        }

        Ok(())
    }

    /// Settings handed to the style screen.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings::new(self.style.clone())
    }

    /// Stores settings coming back from the style screen.
    pub fn set_app_settings(&mut self, settings: AppSettings) {
        self.style = settings.selected_style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleKind;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.style.kind(), StyleKind::BubbleWrap);
        assert_eq!(config.overlays, MapController::new());
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_config_validate() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_foreign_color() {
        let mut config = Config::new();
        config.style = StyleSheet::new(StyleKind::Cinnabar);
        config.style.current_color = "sepia".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_both_path_overlays() {
        let mut config = Config::new();
        config.overlays.show_bike_overlay = true;
        config.overlays.show_walking_path_overlay = true;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Bike and walking"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.style = StyleSheet::new(StyleKind::Refill);
        config.style.current_color = "sepia".to_string();
        config.style.detail_level = 7;
        config.overlays.show_transit_overlay = true;
        config.ui.theme_mode = ThemeMode::Light;

        config.save_to(&path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.style.kind(), StyleKind::Refill);
        assert_eq!(loaded.style.current_color, "sepia");
        assert_eq!(loaded.style.detail_level, 7);
        assert!(loaded.overlays.show_transit_overlay);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_config_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[style]\nvariant = \"Walkabout\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.style.kind(), StyleKind::Walkabout);
        assert_eq!(config.style.label_level, 0);
        assert!(!config.overlays.show_bike_overlay);
    }

    #[test]
    fn test_config_load_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "style = 42").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_app_settings_round_trip() {
        let mut config = Config::new();
        let mut settings = config.app_settings();
        settings.selected_style = StyleSheet::new(StyleKind::Zinc);
        config.set_app_settings(settings);
        assert_eq!(config.style.kind(), StyleKind::Zinc);
    }
}
