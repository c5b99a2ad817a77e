//! Terminal User Interface (TUI) for focuspulse.
//!
//! The timer face, session selector and settings form. Built with ratatui
//! and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, SettingsForm};
pub use event::{handle_key, Action};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::FocusPulseError;
use crate::pomodoro::SessionController;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(controller: SessionController) -> Result<(), FocusPulseError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FocusPulseError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FocusPulseError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusPulseError::Terminal(format!("Failed to create terminal: {e}")))?;

    info!(durations = ?controller.durations(), "timer opened");

    let mut app = App::new(controller);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    info!(
        completed_focus = app.controller.completed_focus_sessions(),
        "timer closed"
    );

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), FocusPulseError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusPulseError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        let timeout = app.poll_timeout(Instant::now());
        if let Some(action) = event::handle_events(app, timeout)? {
            let now = Instant::now();
            match action {
                Action::Quit => app.should_quit = true,
                Action::Toggle => app.toggle(now),
                Action::Start => app.start(now),
                Action::Pause => app.pause(),
                Action::Reset => app.reset(),
                Action::Switch(session) => app.switch_session(session),
                Action::SaveSettings => app.submit_settings(),
            }
        }

        if app.should_quit {
            break;
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}
