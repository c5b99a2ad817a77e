//! Session kinds.
//!
//! A session is the kind of interval currently being counted down.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of interval the timer is counting down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    /// Work interval
    #[default]
    Focus,
    /// Short rest between focus sessions
    ShortBreak,
    /// Long rest after every fourth focus session
    LongBreak,
}

impl Session {
    /// All sessions in selector order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// One-line hint shown under the session selector.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Focus => "Focus session: Stay concentrated on your task",
            Self::ShortBreak => "Short break: Quick rest to refresh your mind",
            Self::LongBreak => {
                "Long break: Rest longer after completing multiple focus sessions"
            }
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }

    /// Position in [`Session::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Focus => 0,
            Self::ShortBreak => 1,
            Self::LongBreak => 2,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_focus() {
        assert_eq!(Session::default(), Session::Focus);
    }

    #[test]
    fn test_is_break() {
        assert!(!Session::Focus.is_break());
        assert!(Session::ShortBreak.is_break());
        assert!(Session::LongBreak.is_break());
    }

    #[test]
    fn test_index_matches_all() {
        for (i, session) in Session::ALL.iter().enumerate() {
            assert_eq!(session.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Session::ShortBreak).unwrap();
        assert_eq!(json, "\"short_break\"");
    }
}
