//! Session schedule preview.
//!
//! Runs a silent controller through its automatic transitions to show what
//! an uninterrupted run would look like.

use std::time::Instant;

use serde::Serialize;

use crate::pomodoro::alert::SilentAlert;
use crate::pomodoro::controller::SessionController;
use crate::pomodoro::durations::Durations;
use crate::pomodoro::session::Session;

/// One step of an uninterrupted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// 1-based position in the run.
    pub step: usize,
    /// Session counted down in this step.
    pub session: Session,
    /// Length of the step in minutes.
    pub minutes: u32,
    /// Focus sessions completed once this step ends.
    pub completed_focus: u32,
}

/// The first `steps` sessions an untouched controller runs through.
#[must_use]
pub fn plan(durations: Durations, steps: usize) -> Vec<PlanStep> {
    let mut controller = SessionController::new(durations, Box::new(SilentAlert));
    controller.start(Instant::now());

    let mut out = Vec::new();
    for step in 1..=steps {
        let session = controller.session();
        let minutes = durations.minutes_for(session);
        let completed_focus = loop {
            if let Some(done) = controller.tick() {
                break done.completed_focus;
            }
        };
        out.push(PlanStep {
            step,
            session,
            minutes,
            completed_focus,
        });
    }
    out
}
