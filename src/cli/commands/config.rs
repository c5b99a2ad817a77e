//! Config command implementation.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::FocusPulseError;
use crate::output::{format_config, to_json};
use crate::pomodoro::Durations;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output
/// formatting fails.
pub fn config(
    paths: &Paths,
    config: &Config,
    durations: Durations,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, FocusPulseError> {
    match cmd {
        ConfigCommands::Show => format_config(config, durations, format),
        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "config_file": paths.config_file,
                "log_file": paths.log_file,
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },
        ConfigCommands::Init { force } => init(paths, force, format),
    }
}

/// Write a default config file.
fn init(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, FocusPulseError> {
    let existed = paths.config_file.exists();
    if existed && !force {
        return Err(FocusPulseError::Config(format!(
            "Config file already exists: {}. Use --force to overwrite.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    info!(path = %paths.config_file.display(), overwritten = existed, "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "config_file": paths.config_file,
            "overwritten": existed,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote".green(),
            paths.config_file.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("fp"));

        init(&paths, false, OutputFormat::Pretty).unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "durations:\n  focus_minutes: 40\n").unwrap();

        assert!(init(&paths, false, OutputFormat::Pretty).is_err());
        assert!(init(&paths, true, OutputFormat::Json).is_ok());

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.durations.focus_minutes, 25);
    }
}
