//! Plan command implementation.

use crate::cli::args::OutputFormat;
use crate::error::FocusPulseError;
use crate::output::format_plan;
use crate::pomodoro::{self, Durations};

/// Show the first `cycles` sessions of an uninterrupted run.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn plan(
    durations: Durations,
    cycles: usize,
    format: OutputFormat,
) -> Result<String, FocusPulseError> {
    let steps = pomodoro::plan(durations, cycles);
    format_plan(&steps, durations, format)
}
