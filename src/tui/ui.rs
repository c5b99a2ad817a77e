//! UI rendering for the TUI.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::pomodoro::{DurationField, Session};
use crate::tui::app::{App, SettingsForm, HELP};

const fn session_color(session: Session) -> Color {
    match session {
        Session::Focus => Color::Red,
        Session::ShortBreak => Color::Green,
        Session::LongBreak => Color::Blue,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, timer face, session selector, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Timer face
            Constraint::Length(5), // Session selector
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);
    render_selector(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[4]);

    if let Some(form) = &app.settings {
        let area = frame.area();
        render_settings(frame, form, area);
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " FocusPulse ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Completed Sessions: "),
        Span::styled(
            app.controller.completed_focus_sessions().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the countdown, run state and progress gauge.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let controller = &app.controller;
    let color = session_color(controller.session());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", controller.session()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // State
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let countdown = Paragraph::new(controller.format_remaining())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    frame.render_widget(countdown, rows[0]);

    let state = if controller.is_running() {
        let ends = Local::now()
            + chrono::Duration::seconds(i64::from(controller.remaining_seconds()));
        format!("Running  (ends {})", ends.format("%H:%M"))
    } else {
        "Paused".to_string()
    };
    let state = Paragraph::new(state)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(state, rows[1]);

    let percent = controller.progress() * 100.0;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(controller.progress().clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));
    frame.render_widget(gauge, rows[3]);
}

/// Render the session type selector.
fn render_selector(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let current = app.controller.session();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Session Type ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let titles = Session::ALL.iter().enumerate().map(|(i, session)| {
        Line::from(format!("{} {}", i + 1, session.display_name()))
    });
    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(session_color(current))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    frame.render_widget(tabs, rows[0]);

    let info = Paragraph::new(current.description()).style(Style::default().fg(Color::Gray));
    frame.render_widget(info, rows[1]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the settings form as a popup.
fn render_settings(frame: &mut Frame<'_>, form: &SettingsForm, area: Rect) {
    let popup = centered_rect(46, 9, area);

    let mut lines = Vec::with_capacity(DurationField::ALL.len() + 2);
    for (i, field) in DurationField::ALL.iter().enumerate() {
        let focused = i == form.focused;
        let value_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<32}", field.label()),
                Style::default().fg(if focused { Color::White } else { Color::Gray }),
            ),
            Span::styled(format!("[{:>3}]", form.inputs[i]), value_style),
            Span::styled(
                format!(" {}-{}", field.min(), field.max()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Enter:save | Esc:cancel",
        Style::default().fg(Color::DarkGray),
    ));

    let form_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Timer Settings "),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(form_widget, popup);
}

/// A `width` x `height` rectangle centred in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
