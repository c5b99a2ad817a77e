//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::pomodoro::{Completion, DurationField, Durations, Session, SessionController};

/// Longest time the event loop waits for input before checking the timer.
pub const MAX_POLL: Duration = Duration::from_millis(100);

/// Longest accepted entry in a settings field.
const MAX_INPUT_LEN: usize = 3;

/// Default status bar text.
pub const HELP: &str = "space:start/pause | r:reset | 1/2/3:session | e:settings | ?:help | q:quit";

/// Editable copy of the durations while the settings form is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    /// Raw text of each field, in [`DurationField::ALL`] order.
    pub inputs: [String; 3],
    /// Index of the field receiving keystrokes.
    pub focused: usize,
}

impl SettingsForm {
    /// Open the form pre-filled with the current durations.
    #[must_use]
    pub fn from_durations(durations: Durations) -> Self {
        Self {
            inputs: DurationField::ALL.map(|field| durations.get(field).to_string()),
            focused: 0,
        }
    }

    /// Field receiving keystrokes.
    #[must_use]
    pub const fn focused_field(&self) -> DurationField {
        DurationField::ALL[self.focused]
    }

    /// Move focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len();
    }

    /// Move focus to the previous field, wrapping around.
    pub fn previous_field(&mut self) {
        self.focused = (self.focused + self.inputs.len() - 1) % self.inputs.len();
    }

    /// Append a digit to the focused field.
    pub fn push_digit(&mut self, c: char) {
        let input = &mut self.inputs[self.focused];
        if c.is_ascii_digit() && input.len() < MAX_INPUT_LEN {
            input.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.inputs[self.focused].pop();
    }

    /// Resolve the entries against the previous durations.
    #[must_use]
    pub fn submit(&self, previous: Durations) -> Durations {
        let [focus, short_break, long_break] = &self.inputs;
        Durations::from_input(focus, short_break, long_break, previous)
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The session state machine.
    pub controller: SessionController,
    /// Settings form, when open.
    pub settings: Option<SettingsForm>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller,
            settings: None,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Start if paused, pause if running.
    pub fn toggle(&mut self, now: Instant) {
        if self.controller.is_running() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self, now: Instant) {
        self.controller.start(now);
        self.status = Some(format!("{} running", self.controller.session()));
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        self.controller.pause();
        self.status = Some("Paused".to_string());
    }

    /// Rewind the current session.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = Some(format!("{} reset", self.controller.session()));
    }

    /// Switch to another session.
    pub fn switch_session(&mut self, target: Session) {
        self.controller.switch_session(target);
        self.status = Some(format!("Switched to {target}"));
    }

    /// Open the settings form.
    pub fn open_settings(&mut self) {
        self.settings = Some(SettingsForm::from_durations(self.controller.durations()));
        self.status = Some("Tab:next field | Enter:save | Esc:cancel".to_string());
    }

    /// Close the settings form without applying it.
    pub fn cancel_settings(&mut self) {
        self.settings = None;
        self.status = None;
    }

    /// Apply the settings form and close it.
    pub fn submit_settings(&mut self) {
        if let Some(form) = self.settings.take() {
            let durations = form.submit(self.controller.durations());
            self.controller.update_durations(durations);
            self.status = Some(format!(
                "Saved: focus {}m, short break {}m, long break {}m",
                durations.focus(),
                durations.short_break(),
                durations.long_break()
            ));
        }
    }

    /// Fire due ticks and report any completed session.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(last) = self.controller.advance(now).last() {
            self.status = Some(completion_message(last));
        }
    }

    /// How long the event loop may wait for input.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .until_next_tick(now)
            .map_or(MAX_POLL, |until| until.min(MAX_POLL))
    }
}

fn completion_message(completion: &Completion) -> String {
    format!(
        "{} complete! {} started",
        completion.finished, completion.next
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::SilentAlert;

    fn app() -> App {
        App::new(SessionController::new(
            Durations::default(),
            Box::new(SilentAlert),
        ))
    }

    #[test]
    fn test_toggle() {
        let mut app = app();
        let now = Instant::now();

        app.toggle(now);
        assert!(app.controller.is_running());
        app.toggle(now);
        assert!(!app.controller.is_running());
        assert_eq!(app.status.as_deref(), Some("Paused"));
    }

    #[test]
    fn test_settings_form_editing() {
        let mut form = SettingsForm::from_durations(Durations::default());
        assert_eq!(form.inputs, ["25", "5", "15"].map(String::from));
        assert_eq!(form.focused_field(), DurationField::Focus);

        form.backspace();
        form.backspace();
        form.push_digit('4');
        form.push_digit('x');
        form.push_digit('0');
        form.push_digit('0');
        form.push_digit('0');
        assert_eq!(form.inputs[0], "400");

        form.previous_field();
        assert_eq!(form.focused_field(), DurationField::LongBreak);
        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field(), DurationField::ShortBreak);
    }

    #[test]
    fn test_submit_settings_clamps_and_falls_back() {
        let mut app = app();
        app.open_settings();
        if let Some(form) = app.settings.as_mut() {
            form.inputs = ["999".to_string(), String::new(), "0".to_string()];
        }
        app.submit_settings();

        assert!(app.settings.is_none());
        assert_eq!(app.controller.durations(), Durations::new(60, 5, 1));
        assert_eq!(app.controller.remaining_seconds(), 3600);
    }

    #[test]
    fn test_cancel_settings_keeps_durations() {
        let mut app = app();
        app.open_settings();
        if let Some(form) = app.settings.as_mut() {
            form.inputs[0] = "50".to_string();
        }
        app.cancel_settings();

        assert!(app.settings.is_none());
        assert_eq!(app.controller.durations(), Durations::default());
    }

    #[test]
    fn test_on_tick_reports_completion() {
        let mut app = App::new(SessionController::new(
            Durations::new(1, 1, 1),
            Box::new(SilentAlert),
        ));
        let start = Instant::now();
        app.start(start);
        app.on_tick(start + Duration::from_secs(60));

        assert_eq!(app.controller.session(), Session::ShortBreak);
        assert_eq!(
            app.status.as_deref(),
            Some("Focus complete! Short Break started")
        );
    }

    #[test]
    fn test_poll_timeout() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), MAX_POLL);

        app.start(now);
        assert_eq!(app.poll_timeout(now + Duration::from_millis(950)), Duration::from_millis(50));
    }
}
