//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusPulseError;
use crate::pomodoro::Session;
use crate::tui::app::{App, HELP};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Start the timer.
    Start,
    /// Pause the timer.
    Pause,
    /// Reset the current session.
    Reset,
    /// Switch to another session.
    Switch(Session),
    /// Apply the settings form.
    SaveSettings,
}

/// Handle terminal events.
///
/// Waits up to `timeout` for input. Returns an action to take, or None if
/// no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, FocusPulseError> {
    if event::poll(timeout)
        .map_err(|e| FocusPulseError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| FocusPulseError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Map a key press to an action, applying form edits directly.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.settings.is_some() {
        match key.code {
            KeyCode::Enter => return Some(Action::SaveSettings),
            KeyCode::Esc => {
                app.cancel_settings();
                return None;
            }
            _ => {}
        }
    }

    if let Some(form) = app.settings.as_mut() {
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.push_digit(c),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        // Timer controls
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('s') => Some(Action::Start),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Reset),

        // Session selector
        KeyCode::Char('1' | 'f') => Some(Action::Switch(Session::Focus)),
        KeyCode::Char('2' | 'b') => Some(Action::Switch(Session::ShortBreak)),
        KeyCode::Char('3' | 'l') => Some(Action::Switch(Session::LongBreak)),

        KeyCode::Char('e') => {
            app.open_settings();
            None
        }

        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }

        _ => None,
    }
}
