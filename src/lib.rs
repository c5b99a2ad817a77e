//! focuspulse - A Pomodoro focus timer for the terminal
//!
//! This crate provides the Pomodoro session state machine and a terminal
//! interface around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pomodoro;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocusPulseError;
pub use pomodoro::{Durations, Session, SessionController};
