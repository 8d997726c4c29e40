//! Tic-tac-toe rules as pure functions over an immutable board.
//!
//! # Architecture
//!
//! - **Board**: nine squares, replaced wholesale on every move
//! - **Rules**: next player, winner, and move application
//! - **Status**: the one-line summary shown to players
//! - **GameState**: an owned board plus an edge-triggered win watcher
//!
//! # Example
//!
//! ```
//! use cats_game_rules::{Board, Position, Status, Mark};
//!
//! let board = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .filter_map(Position::from_index)
//!     .fold(Board::new(), |b, pos| b.select_square(pos));
//!
//! assert_eq!(board.status(), Status::Winner(Mark::X));
//! assert_eq!(board.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod status;
mod types;

pub use game::{GameState, WinNotice, WinWatcher};
pub use phases::{Outcome, Phase, is_terminal, phase};
pub use position::Position;
pub use rules::{current_player, restart, select_square, winner, winning_line};
pub use status::{Status, status};
pub use types::{Board, BoardParseError, Mark, Square};
