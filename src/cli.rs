//! Command-line interface for cats_game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cat's Game - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "cats_game")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "cats_game.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Print the status of a board, e.g. "XO.|.X.|..O"
    Status {
        /// Nine cells: X, O, or . for empty (| and spaces are ignored)
        board: String,
    },

    /// Apply moves to a fresh board and print the result
    Replay {
        /// Cells in play order, as indices (0-8) or labels ("center")
        moves: Vec<String>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
