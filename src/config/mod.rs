//! Configuration management for chat-pulse.
//!
//! Handles:
//! - Theme settings (color, Unicode)
//! - Report defaults (chart, JSON formatting)
//!
//! Configuration is read from the platform config directory, with
//! optional per-project overrides from a `.chat-pulse.toml` next to the
//! transcripts being analyzed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PulseError, Result};
use crate::util::atomic_write;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Theme settings.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Report defaults.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Project-specific configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = ".chat-pulse.toml";

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns the built-in defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration with project-specific overrides.
    ///
    /// Searches for `.chat-pulse.toml` in the given directory and merges
    /// it over the global configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the project config exists but cannot be
    /// parsed. A broken global config falls back to defaults.
    pub fn load_for_project(project_dir: &Path) -> Result<Self> {
        let mut config = Self::load().unwrap_or_default();

        let project_config_path = project_dir.join(PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            let project_config = Self::load_from(&project_config_path)?;
            config.merge_from(&project_config);
        }

        Ok(config)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PulseError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| PulseError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge_from(&mut self, other: &Config) {
        self.theme.color = other.theme.color;
        self.theme.unicode = other.theme.unicode;

        self.report.chart = other.report.chart;
        self.report.pretty_json = other.report.pretty_json;
        if other.report.chart_width != default_chart_width() {
            self.report.chart_width = other.report.chart_width;
        }
    }

    /// Save configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let config_path = default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path.
    ///
    /// Uses atomic file writes so a failed save never leaves a truncated
    /// config behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PulseError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })?;

        atomic_write(path, content.as_bytes())?;

        Ok(())
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Use color output when writing to a terminal.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Use Unicode characters for bars and separators.
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the daily activity chart.
    #[serde(default = "default_true")]
    pub chart: bool,
    /// Bar chart width in characters.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    /// Pretty-print JSON output by default.
    #[serde(default)]
    pub pretty_json: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart: true,
            chart_width: 20,
            pretty_json: false,
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_chart_width() -> usize {
    20
}

/// Get the default configuration path.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be
/// determined.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| PulseError::InvalidConfig {
        message: "Cannot determine config directory for this platform".to_string(),
    })?;

    Ok(config_dir.join("chat-pulse").join("config.toml"))
}
