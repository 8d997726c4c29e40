//! Headless commands that print a board and its status.

use anyhow::{Context, Result};
use cats_game_rules::{Board, Mark, Position, Status, is_terminal, restart, select_square};
use serde::Serialize;
use tracing::{debug, instrument};

/// JSON view of a board for scripting.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    board: Board,
    status: String,
    winner: Option<Mark>,
    terminal: bool,
}

impl Snapshot {
    fn of(board: Board) -> Self {
        Self {
            status: board.status().to_string(),
            winner: board.winner(),
            terminal: is_terminal(&board),
            board,
        }
    }
}

/// Parses a board string and renders it with its status.
#[instrument]
pub fn status(input: &str) -> Result<String> {
    let board: Board = input
        .parse()
        .with_context(|| format!("Invalid board '{}'", input))?;
    Ok(render(&board))
}

/// Plays `moves` on a fresh board. Rejected moves are skipped silently.
#[instrument]
pub fn replay(moves: &[String], json: bool) -> Result<String> {
    let mut board = restart();
    for mv in moves {
        let pos = Position::from_label_or_number(mv)
            .with_context(|| format!("Unknown cell '{}' (use 0-8 or a label)", mv))?;
        let next = select_square(&board, pos);
        if next == board {
            debug!(position = %pos, "Move had no effect");
        }
        board = next;
    }

    if json {
        serde_json::to_string_pretty(&Snapshot::of(board)).context("Failed to encode snapshot")
    } else {
        Ok(render(&board))
    }
}

fn render(board: &Board) -> String {
    let status: Status = board.status();
    format!("{}\n\n{}", board, status)
}
