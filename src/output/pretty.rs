use colored::Colorize;

use crate::config::Config;
use crate::pomodoro::{format_duration, Durations, PlanStep, Session};

fn paint(session: Session, text: &str) -> String {
    match session {
        Session::Focus => text.red().bold().to_string(),
        Session::ShortBreak => text.green().to_string(),
        Session::LongBreak => text.blue().to_string(),
    }
}

/// Format a session plan as a pretty table
pub fn format_plan_pretty(steps: &[PlanStep], durations: Durations) -> String {
    if steps.is_empty() {
        return "Session plan (0 steps)\n  Nothing to show".to_string();
    }

    let mut output = format!(
        "Session plan ({} steps)  focus {}m / short {}m / long {}m\n",
        steps.len(),
        durations.focus(),
        durations.short_break(),
        durations.long_break()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for step in steps {
        let name = format!("{:<12}", step.session.display_name());
        let mut line = format!(
            "{:>3}. {} {:>3} min",
            step.step,
            paint(step.session, &name),
            step.minutes
        );

        if !step.session.is_break() {
            line.push_str(&format!(
                "  {}",
                format!("#{} completed", step.completed_focus).dimmed()
            ));
        }

        output.push_str(&line);
        output.push('\n');
    }

    let total: u32 = steps.iter().map(|s| s.minutes).sum();
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}",
        "Total".dimmed(),
        format_duration(chrono::Duration::minutes(i64::from(total)))
    ));

    output
}

/// Format the effective configuration as pretty output
pub fn format_config_pretty(config: &Config, durations: Durations) -> String {
    let mut output = "Configuration\n".bold().to_string();
    output.push_str(&format!(
        "  {}: {} min\n",
        "Focus".dimmed(),
        durations.focus()
    ));
    output.push_str(&format!(
        "  {}: {} min\n",
        "Short break".dimmed(),
        durations.short_break()
    ));
    output.push_str(&format!(
        "  {}: {} min\n",
        "Long break".dimmed(),
        durations.long_break()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Alert".dimmed(),
        if config.alert.enabled { "bell" } else { "off" }
    ));
    output.push_str(&format!(
        "  {}: {:?}",
        "Default output".dimmed(),
        config.general.default_output
    ));
    output
}
