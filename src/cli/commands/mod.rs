//! Command implementations for focuspulse.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod plan;

pub use config::config;
pub use plan::plan;

use crate::cli::args::DurationArgs;
use crate::config::Config;
use crate::pomodoro::Durations;

/// Startup durations: config file values overridden by command-line flags,
/// all clamped into range.
#[must_use]
pub fn resolve_durations(config: &Config, args: &DurationArgs) -> Durations {
    let base = &config.durations;
    Durations::new(
        args.focus.unwrap_or(base.focus_minutes),
        args.short_break.unwrap_or(base.short_break_minutes),
        args.long_break.unwrap_or(base.long_break_minutes),
    )
}
