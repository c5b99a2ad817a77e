//! Countdown arithmetic and the one-second ticker.
//!
//! Provides countdown formatting and the single armed deadline that drives
//! the session controller.

use std::time::{Duration, Instant};

/// Length of one tick.
pub const TICK: Duration = Duration::from_secs(1);

/// The single periodic timer.
///
/// At most one deadline exists at a time. Arming always replaces the
/// previous deadline, so two countdowns can never overlap.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    next: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Arm the ticker so the first tick is due one second after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.disarm();
        self.next = Some(now + TICK);
    }

    /// Disarm the ticker. No ticks are due until it is armed again.
    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Check if a deadline is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Number of whole ticks that have come due at `now`.
    #[must_use]
    pub fn due(&self, now: Instant) -> u64 {
        match self.next {
            Some(next) if now >= next => {
                let late = now.duration_since(next).as_secs();
                late + 1
            }
            _ => 0,
        }
    }

    /// Mark one due tick as handled, moving the deadline forward by a second.
    pub fn consume(&mut self) {
        if let Some(next) = self.next {
            self.next = Some(next + TICK);
        }
    }

    /// Time left until the next tick, if armed.
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }
}

/// Format a number of seconds as MM:SS.
#[must_use]
pub fn format_mmss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Fraction of a countdown that has elapsed (0.0 - 1.0).
#[must_use]
pub fn progress(remaining_seconds: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 1.0;
    }
    let remaining = f64::from(remaining_seconds.min(total_seconds));
    1.0 - remaining / f64::from(total_seconds)
}

/// Format a length as a human-readable string.
#[must_use]
pub fn format_duration(d: chrono::Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}
