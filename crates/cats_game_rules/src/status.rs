//! Human-readable game status.

use crate::rules::{current_player, is_scratch, winner};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Summary of a board for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A mark owns a complete line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board full, nobody won.
    #[display("Scratch: Cat's game")]
    Scratch,
    /// Game continues with this mark to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Returns true if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Computes the status of `board`.
#[instrument]
pub fn status(board: &Board) -> Status {
    if let Some(mark) = winner(board) {
        Status::Winner(mark)
    } else if is_scratch(board) {
        Status::Scratch
    } else {
        Status::NextPlayer(current_player(board))
    }
}

impl Board {
    /// Status of this board.
    pub fn status(&self) -> Status {
        status(self)
    }
}
