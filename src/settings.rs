//! User settings, loaded from a JSON file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::numbers::NumberFormat;
use crate::render::ColorMode;

/// User settings, read from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub number_format: NumberFormat,
    /// Seconds the demo waits before changing the last label
    pub demo_delay_secs: f64,
    /// Cross-dissolve duration recorded for the demo's text change
    pub transition_secs: f64,
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            demo_delay_secs: 2.0,
            transition_secs: 0.7,
            color: ColorMode::Auto,
        }
    }
}

impl Settings {
    /// `<config dir>/textkit/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("textkit").join("settings.json"))
    }

    /// Load settings from `path`, or from the default location
    ///
    /// An explicit path must exist. A missing default file just means
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::debug!("No settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        settings
            .validate()
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, content).context("Failed to write settings file")?;

        Ok(())
    }

    /// Reject number formats whose separators could not be told apart
    pub fn validate(&self) -> Result<()> {
        let format = &self.number_format;
        anyhow::ensure!(
            format.decimal_separator != format.grouping_separator,
            "decimal and grouping separators are both {:?}",
            format.decimal_separator
        );
        Ok(())
    }

    pub fn demo_delay(&self) -> Duration {
        seconds(self.demo_delay_secs)
    }

    pub fn transition(&self) -> Duration {
        seconds(self.transition_secs)
    }
}

/// Negative, NaN and infinite values become zero
fn seconds(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}
