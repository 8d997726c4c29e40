//! Applying and resetting moves.

use super::{turn::current_player, win::winner};
use crate::{Board, Position, Square};
use tracing::{debug, instrument};

/// Plays the current player's mark at `pos`.
///
/// Returns a new board. If the game already has a winner or the square is
/// taken, the input board is returned unchanged.
#[instrument]
pub fn select_square(board: &Board, pos: Position) -> Board {
    if let Some(mark) = winner(board) {
        debug!(%mark, "Move ignored: game already won");
        return *board;
    }

    if !board.is_empty(pos) {
        debug!(position = %pos, "Move ignored: square occupied");
        return *board;
    }

    let mark = current_player(board);
    debug!(%mark, position = %pos, "Mark placed");
    board.with(pos, Square::Occupied(mark))
}

/// A fresh board of nine empty squares.
#[instrument]
pub fn restart() -> Board {
    Board::new()
}
