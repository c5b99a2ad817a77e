//! Log setup.
//!
//! The TUI owns stdout and stderr while it runs, so logs go to
//! `~/.focuspulse/focuspulse.log` instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Paths;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "focuspulse=info";

/// Install the global subscriber writing to the log file.
///
/// Logging is left disabled if the file cannot be opened.
pub fn init(paths: &Paths) {
    if paths.ensure_dirs().is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.log_file)
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()
        .ok();
}
