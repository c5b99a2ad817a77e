//! The session controller.
//!
//! Owns the timer state and the single [`Ticker`]. Views read state through
//! the accessors and forward user intents as method calls. Nothing here can
//! fail: the only fallible step, the completion alert, is logged and dropped.
//!
//! Invariant: `running` is true exactly when the ticker is armed.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::pomodoro::alert::Alert;
use crate::pomodoro::durations::Durations;
use crate::pomodoro::session::Session;
use crate::pomodoro::timer::{format_mmss, progress, Ticker};

/// A long break replaces the short break after this many focus sessions.
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// What happened when a session ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Session that just reached zero.
    pub finished: Session,
    /// Session that was started automatically.
    pub next: Session,
    /// Completed focus sessions after this transition.
    pub completed_focus: u32,
}

/// Pomodoro state machine: {Focus, ShortBreak, LongBreak} x {Running, Paused}.
pub struct SessionController {
    durations: Durations,
    session: Session,
    remaining_seconds: u32,
    running: bool,
    completed_focus: u32,
    ticker: Ticker,
    alert: Box<dyn Alert>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("durations", &self.durations)
            .field("session", &self.session)
            .field("remaining_seconds", &self.remaining_seconds)
            .field("running", &self.running)
            .field("completed_focus", &self.completed_focus)
            .finish_non_exhaustive()
    }
}

impl SessionController {
    /// Create a paused controller in a fresh Focus session.
    #[must_use]
    pub fn new(durations: Durations, alert: Box<dyn Alert>) -> Self {
        Self {
            durations,
            session: Session::Focus,
            remaining_seconds: durations.seconds_for(Session::Focus),
            running: false,
            completed_focus: 0,
            ticker: Ticker::new(),
            alert,
        }
    }

    /// Start or resume the countdown. The first tick is due a second after `now`.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.ticker.arm(now);
        debug!(session = %self.session, remaining = self.remaining_seconds, "timer started");
    }

    /// Stop the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        self.halt();
        debug!(session = %self.session, remaining = self.remaining_seconds, "timer paused");
    }

    /// Stop the countdown and rewind the current session.
    pub fn reset(&mut self) {
        self.halt();
        self.remaining_seconds = self.durations.seconds_for(self.session);
        debug!(session = %self.session, "timer reset");
    }

    /// Manually switch to `target`, paused at its full duration.
    pub fn switch_session(&mut self, target: Session) {
        self.halt();
        self.session = target;
        self.remaining_seconds = self.durations.seconds_for(target);
        debug!(session = %target, "switched session");
    }

    /// Store new durations. If the current session's length changed the
    /// timer is paused and rewound to the new length.
    pub fn update_durations(&mut self, durations: Durations) {
        let before = self.durations.minutes_for(self.session);
        self.durations = durations;
        debug!(
            focus = durations.focus(),
            short_break = durations.short_break(),
            long_break = durations.long_break(),
            "durations updated"
        );

        if durations.minutes_for(self.session) != before {
            self.reset();
        }
    }

    /// Count down one second. Does nothing while paused.
    ///
    /// Returns the transition if this tick finished the session.
    pub fn tick(&mut self) -> Option<Completion> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            Some(self.complete())
        } else {
            None
        }
    }

    /// Fire every tick that has come due by `now`, in order.
    pub fn advance(&mut self, now: Instant) -> Vec<Completion> {
        let mut completions = Vec::new();
        while self.running && self.ticker.due(now) > 0 {
            self.ticker.consume();
            if let Some(completion) = self.tick() {
                completions.push(completion);
            }
        }
        completions
    }

    fn complete(&mut self) -> Completion {
        if let Err(error) = self.alert.play() {
            warn!(%error, "failed to play completion alert");
        }

        let finished = self.session;
        let next = match finished {
            Session::Focus => {
                self.completed_focus += 1;
                if self.completed_focus % LONG_BREAK_INTERVAL == 0 {
                    Session::LongBreak
                } else {
                    Session::ShortBreak
                }
            }
            Session::ShortBreak | Session::LongBreak => Session::Focus,
        };

        self.session = next;
        self.remaining_seconds = self.durations.seconds_for(next);
        // The ticker keeps its cadence: the next deadline is already one
        // second past the completing tick.
        self.running = true;

        info!(
            %finished,
            %next,
            completed_focus = self.completed_focus,
            "session complete"
        );

        Completion {
            finished,
            next,
            completed_focus: self.completed_focus,
        }
    }

    fn halt(&mut self) {
        self.running = false;
        self.ticker.disarm();
    }

    /// Active session.
    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    /// Seconds left in the active session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Full length of the active session in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.durations.seconds_for(self.session)
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Focus sessions completed since startup.
    #[must_use]
    pub const fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus
    }

    /// Configured durations.
    #[must_use]
    pub const fn durations(&self) -> Durations {
        self.durations
    }

    /// Fraction of the active session that has elapsed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        progress(self.remaining_seconds, self.total_seconds())
    }

    /// Remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// Time until the next tick, or `None` while paused.
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.until_next(now)
    }
}
