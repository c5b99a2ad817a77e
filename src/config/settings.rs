//! Configuration settings for focuspulse.
//!
//! Settings are loaded from `~/.focuspulse/config.yaml` at startup. They
//! only seed the initial durations; changes made in the running timer are
//! not written back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::error::FocusPulseError;
use crate::pomodoro::durations::{
    Durations, DEFAULT_FOCUS_MINUTES, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES,
};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Startup interval lengths.
    pub durations: DurationsConfig,
    /// Completion alert settings.
    pub alert: AlertConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format for non-interactive commands.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Startup interval lengths, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DurationsConfig {
    /// Focus session length.
    #[serde(default = "default_focus")]
    pub focus_minutes: u32,
    /// Short break length.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
}

/// Completion alert settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlertConfig {
    /// Ring the terminal bell when a session completes.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_focus() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_short_break() -> u32 {
    DEFAULT_SHORT_BREAK_MINUTES
}

const fn default_long_break() -> u32 {
    DEFAULT_LONG_BREAK_MINUTES
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for DurationsConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl DurationsConfig {
    /// Clamped durations ready for the controller.
    #[must_use]
    pub const fn to_durations(&self) -> Durations {
        Durations::new(
            self.focus_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusPulseError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusPulseError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            FocusPulseError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocusPulseError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FocusPulseError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FocusPulseError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
