//! Completion alert.
//!
//! Playing the alert is best-effort: the controller logs a failure and
//! carries on.

use std::io::{self, Write};

use crate::error::FocusPulseError;

/// Something that can announce the end of a session.
#[cfg_attr(test, mockall::automock)]
pub trait Alert {
    /// Play the alert once.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert could not be delivered.
    fn play(&self) -> Result<(), FocusPulseError>;
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Alert for TerminalBell {
    fn play(&self) -> Result<(), FocusPulseError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .map_err(|e| FocusPulseError::Alert(format!("terminal bell: {e}")))
    }
}

/// Alert that does nothing, used when alerts are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl Alert for SilentAlert {
    fn play(&self) -> Result<(), FocusPulseError> {
        Ok(())
    }
}
