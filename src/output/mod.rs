//! Output formatting for focuspulse.
//!
//! This module provides formatters for the non-interactive commands.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::FocusPulseError;
use crate::pomodoro::{Durations, PlanStep};

pub use json::*;
pub use pretty::*;

/// Format a session plan based on output format
///
/// # Errors
///
/// Returns `FocusPulseError::Json` if JSON serialization fails.
pub fn format_plan(
    steps: &[PlanStep],
    durations: Durations,
    format: OutputFormat,
) -> Result<String, FocusPulseError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(steps, durations)),
        OutputFormat::Json => format_plan_json(steps, durations),
    }
}

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `FocusPulseError::Json` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    durations: Durations,
    format: OutputFormat,
) -> Result<String, FocusPulseError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, durations)),
        OutputFormat::Json => to_json(&serde_json::json!({
            "config": config,
            "effective_durations": durations
        })),
    }
}
