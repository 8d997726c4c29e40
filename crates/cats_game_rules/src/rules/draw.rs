//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner: the cat's game.
#[instrument]
pub fn is_scratch(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
