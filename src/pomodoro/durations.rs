//! Interval durations and settings-form input handling.
//!
//! Durations are whole minutes. Every value that enters a [`Durations`] is
//! clamped into its field's bounds, so a stored duration is always valid.

use serde::{Deserialize, Serialize};

use crate::pomodoro::session::Session;

/// Default focus length in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Default short break length in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break length in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// One of the three editable duration settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationField {
    Focus,
    ShortBreak,
    LongBreak,
}

impl DurationField {
    /// Fields in form order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Smallest accepted value.
    #[must_use]
    pub const fn min(self) -> u32 {
        1
    }

    /// Largest accepted value.
    #[must_use]
    pub const fn max(self) -> u32 {
        match self {
            Self::Focus | Self::LongBreak => 60,
            Self::ShortBreak => 30,
        }
    }

    /// Clamp a value into this field's bounds.
    #[must_use]
    pub const fn clamp(self, minutes: u32) -> u32 {
        if minutes < self.min() {
            self.min()
        } else if minutes > self.max() {
            self.max()
        } else {
            minutes
        }
    }

    /// Form label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus Duration (minutes)",
            Self::ShortBreak => "Short Break Duration (minutes)",
            Self::LongBreak => "Long Break Duration (minutes)",
        }
    }

    /// The field that configures `session`.
    #[must_use]
    pub const fn for_session(session: Session) -> Self {
        match session {
            Session::Focus => Self::Focus,
            Session::ShortBreak => Self::ShortBreak,
            Session::LongBreak => Self::LongBreak,
        }
    }
}

/// Parse one settings-form entry.
///
/// An integer entry is taken as-is; anything else falls back to `previous`.
/// The result is clamped into the field's bounds, so this never fails.
/// Unlike a prefix parse, `"7.5"` or `"12x"` is rejected whole rather than read as 7 or 12.
#[must_use]
pub fn parse_minutes(field: DurationField, input: &str, previous: u32) -> u32 {
    let parsed = match input.trim().parse::<i64>() {
        Ok(value) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
        Err(_) => previous,
    };
    field.clamp(parsed)
}

/// The three interval lengths, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl Durations {
    /// Build durations, clamping every value into range.
    #[must_use]
    pub const fn new(focus: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            focus: DurationField::Focus.clamp(focus),
            short_break: DurationField::ShortBreak.clamp(short_break),
            long_break: DurationField::LongBreak.clamp(long_break),
        }
    }

    /// Build durations from raw form input, falling back to `previous` per
    /// field when an entry is not a number.
    #[must_use]
    pub fn from_input(focus: &str, short_break: &str, long_break: &str, previous: Self) -> Self {
        Self {
            focus: parse_minutes(DurationField::Focus, focus, previous.focus),
            short_break: parse_minutes(DurationField::ShortBreak, short_break, previous.short_break),
            long_break: parse_minutes(DurationField::LongBreak, long_break, previous.long_break),
        }
    }

    /// Focus length in minutes.
    #[must_use]
    pub const fn focus(&self) -> u32 {
        self.focus
    }

    /// Short break length in minutes.
    #[must_use]
    pub const fn short_break(&self) -> u32 {
        self.short_break
    }

    /// Long break length in minutes.
    #[must_use]
    pub const fn long_break(&self) -> u32 {
        self.long_break
    }

    /// Value of a single field.
    #[must_use]
    pub const fn get(&self, field: DurationField) -> u32 {
        match field {
            DurationField::Focus => self.focus,
            DurationField::ShortBreak => self.short_break,
            DurationField::LongBreak => self.long_break,
        }
    }

    /// Length of `session` in minutes.
    #[must_use]
    pub const fn minutes_for(&self, session: Session) -> u32 {
        self.get(DurationField::for_session(session))
    }

    /// Length of `session` in seconds.
    #[must_use]
    pub const fn seconds_for(&self, session: Session) -> u32 {
        self.minutes_for(session) * 60
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self::new(
            DEFAULT_FOCUS_MINUTES,
            DEFAULT_SHORT_BREAK_MINUTES,
            DEFAULT_LONG_BREAK_MINUTES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = Durations::default();
        assert_eq!(d.focus(), 25);
        assert_eq!(d.short_break(), 5);
        assert_eq!(d.long_break(), 15);
    }

    #[test]
    fn test_new_clamps() {
        let d = Durations::new(0, 31, 999);
        assert_eq!(d.focus(), 1);
        assert_eq!(d.short_break(), 30);
        assert_eq!(d.long_break(), 60);
    }

    #[test]
    fn test_seconds_for() {
        let d = Durations::default();
        assert_eq!(d.seconds_for(Session::Focus), 1500);
        assert_eq!(d.seconds_for(Session::ShortBreak), 300);
        assert_eq!(d.seconds_for(Session::LongBreak), 900);
    }

    #[test]
    fn test_parse_minutes_in_range() {
        assert_eq!(parse_minutes(DurationField::Focus, "40", 25), 40);
        assert_eq!(parse_minutes(DurationField::Focus, "  12 ", 25), 12);
    }

    #[test]
    fn test_parse_minutes_clamps() {
        assert_eq!(parse_minutes(DurationField::Focus, "0", 25), 1);
        assert_eq!(parse_minutes(DurationField::Focus, "999", 25), 60);
        assert_eq!(parse_minutes(DurationField::ShortBreak, "45", 5), 30);
        assert_eq!(parse_minutes(DurationField::LongBreak, "-3", 15), 1);
    }

    #[test]
    fn test_parse_minutes_falls_back() {
        assert_eq!(parse_minutes(DurationField::Focus, "", 25), 25);
        assert_eq!(parse_minutes(DurationField::Focus, "abc", 30), 30);
        assert_eq!(parse_minutes(DurationField::ShortBreak, "7.5", 5), 5);
        assert_eq!(parse_minutes(DurationField::Focus, "12x", 25), 25);
    }

    #[test]
    fn test_from_input_mixed() {
        let previous = Durations::new(30, 10, 20);
        let d = Durations::from_input("50", "oops", "0", previous);
        assert_eq!(d, Durations::new(50, 10, 1));
    }
}
