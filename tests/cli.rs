use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn focuspulse(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focuspulse").unwrap();
    cmd.env("FOCUSPULSE_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("FOCUSPULSE_FOCUS")
        .env_remove("FOCUSPULSE_SHORT_BREAK")
        .env_remove("FOCUSPULSE_LONG_BREAK");
    cmd
}

#[test]
fn help_mentions_pomodoro() {
    let home = TempDir::new().unwrap();
    focuspulse(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"));
}

#[test]
fn plan_shows_default_cycle() {
    let home = TempDir::new().unwrap();
    focuspulse(&home)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session plan (8 steps)"))
        .stdout(predicate::str::contains("Long Break"))
        .stdout(predicate::str::contains("#4 completed"));
}

#[test]
fn plan_json_follows_four_focus_rule() {
    let home = TempDir::new().unwrap();
    let output = focuspulse(&home)
        .args(["plan", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sessions: Vec<&str> = value["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["session"].as_str().unwrap())
        .collect();
    assert_eq!(
        sessions,
        [
            "focus",
            "short_break",
            "focus",
            "short_break",
            "focus",
            "short_break",
            "focus",
            "long_break"
        ]
    );
}

#[test]
fn duration_flags_are_clamped() {
    let home = TempDir::new().unwrap();
    let output = focuspulse(&home)
        .args(["plan", "-n", "2", "-o", "json", "--focus", "999", "--short-break", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["steps"][0]["minutes"], 60);
    assert_eq!(value["steps"][1]["minutes"], 1);
}

#[test]
fn config_file_seeds_durations() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "durations:\n  focus_minutes: 45\n",
    )
    .unwrap();

    focuspulse(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus: 45 min"))
        .stdout(predicate::str::contains("Short break: 5 min"));
}

#[test]
fn config_path_points_into_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config.yaml");
    focuspulse(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_init_refuses_second_run() {
    let home = TempDir::new().unwrap();
    focuspulse(&home)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join("config.yaml").exists());

    focuspulse(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "durations: fifty").unwrap();

    focuspulse(&home)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn log_file_records_config_init() {
    let home = TempDir::new().unwrap();
    focuspulse(&home)
        .env_remove("RUST_LOG")
        .args(["config", "init"])
        .assert()
        .success();

    let log = std::fs::read_to_string(home.path().join("focuspulse.log")).unwrap();
    assert!(log.contains("wrote default config"));
}

#[test]
fn plan_rejects_huge_cycle_count() {
    let home = TempDir::new().unwrap();
    focuspulse(&home)
        .args(["plan", "-n", "18446744073709551615"])
        .assert()
        .failure();
}
