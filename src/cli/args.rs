use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focuspulse")]
#[command(about = "A Pomodoro focus timer for the terminal")]
#[command(long_about = "focuspulse - A Pomodoro focus timer for the terminal

Counts down focus sessions and breaks, switching automatically:
every fourth completed focus session is followed by a long break.

QUICK START:
  focuspulse                  Open the timer
  focuspulse --focus 50       Open the timer with 50-minute focus sessions
  focuspulse plan             Preview the session order
  focuspulse config show      Show the effective configuration

KEYS (in the timer):
  space start/pause   r reset   1/2/3 switch session   e edit durations   q quit

For more information on a specific command, run:
  focuspulse <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(flatten)]
    pub durations: DurationArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Startup duration overrides, in minutes.
///
/// Out-of-range values are clamped the same way the settings form clamps them.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DurationArgs {
    /// Focus session length in minutes (1-60)
    #[arg(long, global = true, env = "FOCUSPULSE_FOCUS")]
    pub focus: Option<u32>,

    /// Short break length in minutes (1-30)
    #[arg(long, global = true, env = "FOCUSPULSE_SHORT_BREAK")]
    pub short_break: Option<u32>,

    /// Long break length in minutes (1-60)
    #[arg(long, global = true, env = "FOCUSPULSE_LONG_BREAK")]
    pub long_break: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// # Keys
    ///
    ///   space      Start or pause
    ///   s / p      Start / pause
    ///   r          Reset the current session
    ///   1 2 3      Switch to focus, short break, long break
    ///   e          Edit durations
    ///   ?          Help
    ///   q          Quit
    Tui,

    /// Preview the session order
    ///
    /// Shows the sessions the timer runs through when left alone,
    /// with the length of each.
    ///
    /// # Examples
    ///
    ///   focuspulse plan                 First 8 steps (through the long break)
    ///   focuspulse plan --cycles 16     Two full cycles
    ///   focuspulse plan -o json         Output as JSON
    Plan {
        /// Number of sessions to show
        #[arg(
            long,
            short = 'n',
            default_value = "8",
            value_parser = clap::value_parser!(u16).range(1..=1000)
        )]
        cycles: u16,
    },

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for config commands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file if none exists
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["focuspulse"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_tui() {
        let cli = Cli::try_parse_from(["focuspulse", "tui"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn test_cli_duration_overrides() {
        let cli = Cli::try_parse_from([
            "focuspulse",
            "--focus",
            "50",
            "--short-break",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.durations.focus, Some(50));
        assert_eq!(cli.durations.short_break, Some(10));
    }

    #[test]
    fn test_cli_plan_default_cycles() {
        let cli = Cli::try_parse_from(["focuspulse", "plan"]).unwrap();
        if let Some(Commands::Plan { cycles }) = cli.command {
            assert_eq!(cycles, 8);
        } else {
            panic!("Expected Plan command");
        }
    }

    #[test]
    fn test_cli_plan_json() {
        let cli = Cli::try_parse_from(["focuspulse", "plan", "-n", "3", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Some(Commands::Plan { cycles: 3 })));
    }

    #[test]
    fn test_cli_plan_rejects_out_of_range_cycles() {
        assert!(Cli::try_parse_from(["focuspulse", "plan", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["focuspulse", "plan", "-n", "1001"]).is_err());
        assert!(
            Cli::try_parse_from(["focuspulse", "plan", "-n", "18446744073709551615"]).is_err()
        );

        let cli = Cli::try_parse_from(["focuspulse", "plan", "-n", "1000"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Plan { cycles: 1000 })));
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["focuspulse", "config", "init", "--force"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Init { force: true }));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_rejects_non_numeric_duration() {
        assert!(Cli::try_parse_from(["focuspulse", "--focus", "abc"]).is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
