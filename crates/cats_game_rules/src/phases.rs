//! Game phases derived from a board.

use crate::status::{Status, status};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Mark won the game.
    Winner(Mark),
    /// Board filled with no winner.
    Scratch,
}

/// Where the game stands.
///
/// `InProgress` accepts moves; `Terminal` never does. Only a restart
/// leaves `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No winner and at least one empty square.
    InProgress,
    /// Winner present, or board full.
    Terminal(Outcome),
}

/// Computes the phase of `board`.
#[instrument]
pub fn phase(board: &Board) -> Phase {
    match status(board) {
        Status::Winner(mark) => Phase::Terminal(Outcome::Winner(mark)),
        Status::Scratch => Phase::Terminal(Outcome::Scratch),
        Status::NextPlayer(_) => Phase::InProgress,
    }
}

/// Returns true once no further moves are accepted.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    matches!(phase(board), Phase::Terminal(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_fresh_board_in_progress() {
        assert_eq!(phase(&Board::new()), Phase::InProgress);
    }

    #[test]
    fn test_won_board_is_terminal() {
        let board: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(phase(&board), Phase::Terminal(Outcome::Winner(Mark::O)));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_scratch_board_is_terminal() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(phase(&board), Phase::Terminal(Outcome::Scratch));
        assert_eq!(
            board.select_square(Position::Center),
            board,
            "full board accepts nothing"
        );
    }
}
