//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_BINARY_NAME, APP_NAME};
use crate::export::{archive_name_at, validate_archive_name};
use crate::models::{CssSolution, ExportOptions, Framework};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "LAYOUTSMITH_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the OS theme
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Cycles Auto → Dark → Light → Auto.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Auto => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Directory exported archives are written to
    pub output_dir: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Export defaults, overridable per command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix of default archive names
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Target framework
    #[serde(default)]
    pub framework: Framework,
    /// Styling approach
    #[serde(default)]
    pub css_solution: CssSolution,
    /// Emit TypeScript annotations
    #[serde(default = "default_true")]
    pub include_types: bool,
    /// Emit header comments
    #[serde(default = "default_true")]
    pub include_comments: bool,
}

fn default_product_name() -> String {
    APP_BINARY_NAME.to_string()
}

const fn default_true() -> bool {
    true
}

impl ExportConfig {
    /// Returns the generation options these defaults describe.
    pub const fn options(&self) -> ExportOptions {
        ExportOptions {
            framework: self.framework,
            css_solution: self.css_solution,
            include_types: self.include_types,
            include_comments: self.include_comments,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        let options = ExportOptions::default();
        Self {
            product_name: default_product_name(),
            framework: options.framework,
            css_solution: options.css_solution,
            include_types: options.include_types,
            include_comments: options.include_comments,
        }
    }
}

/// UI preferences.
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
/// - Linux: `~/.config/Layoutsmith/config.toml`
/// - macOS: `~/Library/Application Support/Layoutsmith/config.toml`
/// - Windows: `%APPDATA%\Layoutsmith\config.toml`
///
/// `LAYOUTSMITH_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
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

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/Layoutsmith/`
    /// - macOS: `~/Library/Application Support/Layoutsmith/`
    /// - Windows: `%APPDATA%\Layoutsmith\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
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

        let content = fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", config_path.display())
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory: {}", config_dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, config_path).with_context(|| {
            format!(
                "Failed to rename temp config file to: {}",
                config_path.display()
            )
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `output_dir` is set
    /// - `product_name` produces a usable archive name
    pub fn validate(&self) -> Result<()> {
        if self.paths.output_dir.as_os_str().is_empty() {
            anyhow::bail!("Output directory cannot be empty");
        }

        if self.export.product_name.trim().is_empty() {
            anyhow::bail!("Product name cannot be empty");
        }

        validate_archive_name(&archive_name_at(&self.export.product_name, 0)).with_context(
            || {
                format!(
                    "Product name '{}' cannot be used in archive names",
                    self.export.product_name
                )
            },
        )?;

        Ok(())
    }
}
