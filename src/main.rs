use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use focuspulse::cli::args::{Cli, Commands};
use focuspulse::cli::commands;
use focuspulse::config::{Config, Paths};
use focuspulse::error::FocusPulseError;
use focuspulse::logging;
use focuspulse::pomodoro::{Alert, SessionController, SilentAlert, TerminalBell};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusPulseError> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    logging::init(&paths);

    let config = Config::load_from_path(&paths.config_file)?;
    let format = cli.output.unwrap_or(config.general.default_output);
    let durations = commands::resolve_durations(&config, &cli.durations);

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let alert: Box<dyn Alert> = if config.alert.enabled {
                Box::new(TerminalBell)
            } else {
                Box::new(SilentAlert)
            };
            focuspulse::tui::run(SessionController::new(durations, alert))?;
            String::new()
        }
        Commands::Plan { cycles } => commands::plan(durations, usize::from(cycles), format)?,
        Commands::Config(args) => commands::config(&paths, &config, durations, args.command, format)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
