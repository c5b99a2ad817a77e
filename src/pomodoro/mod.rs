//! Pomodoro timer core.
//!
//! Provides the session state machine and everything it depends on:
//! - Session kinds and interval durations
//! - Settings input parsing with clamping
//! - The one-second ticker and countdown formatting
//! - The best-effort completion alert
//! - A preview of an uninterrupted run

pub mod alert;
pub mod controller;
pub mod durations;
pub mod plan;
pub mod session;
pub mod timer;

pub use alert::{Alert, SilentAlert, TerminalBell};
pub use controller::{Completion, SessionController, LONG_BREAK_INTERVAL};
pub use durations::{parse_minutes, DurationField, Durations};
pub use plan::{plan, PlanStep};
pub use session::Session;
pub use timer::{format_duration, format_mmss, progress, Ticker};
