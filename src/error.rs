//! Error types for focuspulse.

use thiserror::Error;

/// Errors raised at the edges of the application.
///
/// The session state machine itself never fails; these cover configuration,
/// the terminal, and output formatting.
#[derive(Debug, Error)]
pub enum FocusPulseError {
    /// Configuration could not be read, parsed, or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or polled.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// The completion alert could not be played.
    #[error("alert failed: {0}")]
    Alert(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
