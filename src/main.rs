//! Cat's Game - terminal tic-tac-toe
//!
//! Interactive play plus headless commands for inspecting boards.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_tracing(&settings)?;
            tui::run_tui(&settings)
        }
        Command::Status { board } => {
            init_stderr_tracing(&settings);
            println!("{}", commands::status(&board)?);
            Ok(())
        }
        Command::Replay { moves, json } => {
            init_stderr_tracing(&settings);
            println!("{}", commands::replay(&moves, json)?);
            Ok(())
        }
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs to a file so output does not corrupt the terminal UI.
fn init_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %settings.log_file().display(), "Tracing initialized");
    Ok(())
}

fn init_stderr_tracing(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
