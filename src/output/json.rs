//! JSON output formatting for focuspulse.

use serde::Serialize;
use serde_json::json;

use crate::error::FocusPulseError;
use crate::pomodoro::{Durations, PlanStep};

/// Format a session plan as JSON
///
/// # Errors
///
/// Returns `FocusPulseError::Json` if JSON serialization fails.
pub fn format_plan_json(steps: &[PlanStep], durations: Durations) -> Result<String, FocusPulseError> {
    let total_minutes: u32 = steps.iter().map(|s| s.minutes).sum();
    let output = json!({
        "durations": durations,
        "count": steps.len(),
        "total_minutes": total_minutes,
        "steps": steps
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusPulseError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusPulseError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::plan;

    #[test]
    fn test_plan_json_shape() {
        let durations = Durations::default();
        let out = format_plan_json(&plan(durations, 2), durations).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["total_minutes"], 30);
        assert_eq!(value["durations"]["focus"], 25);
        assert_eq!(value["steps"][0]["session"], "focus");
        assert_eq!(value["steps"][1]["session"], "short_break");
    }
}
