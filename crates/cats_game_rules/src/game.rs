//! Owned game state with edge-triggered win notification.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::phases::{Phase, phase};
use crate::rules::{restart, select_square, winning_line};
use crate::status::{Status, status};
use crate::{Board, Mark, Position};
use tracing::{debug, info, instrument};

/// Fired once when a board first acquires a winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinNotice {
    winner: Mark,
    line: [Position; 3],
    status: Status,
}

impl WinNotice {
    /// The winning mark.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// The completed line, first in scan order.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Status at the moment of the win.
    pub fn status(&self) -> Status {
        self.status
    }
}

/// Observes successive boards and reports the none-to-winner edge.
///
/// Repeated observations of a won board stay silent. Observing a board
/// without a winner (a restart) re-arms the watcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinWatcher {
    previous: Option<Mark>,
}

impl WinWatcher {
    /// Creates a watcher that has seen no winner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `board` and returns a notice only if it just became won.
    #[instrument(skip(self))]
    pub fn observe(&mut self, board: &Board) -> Option<WinNotice> {
        let current = winning_line(board);
        let was_won = self.previous.is_some();
        self.previous = current.map(|(_, mark)| mark);

        match current {
            Some((line, winner)) if !was_won => {
                info!(%winner, "Winner determined");
                Some(WinNotice {
                    winner,
                    line,
                    status: status(board),
                })
            }
            _ => None,
        }
    }
}

/// Current game, owned by whichever surface presents it.
///
/// The board is replaced wholesale on every transition; derived values
/// are recomputed from it on each read.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    watcher: WinWatcher,
}

impl GameState {
    /// Creates a game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Illegal moves leave the game unchanged. Returns a notice if this
    /// move produced the winner.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn select_square(&mut self, pos: Position) -> Option<WinNotice> {
        let next = select_square(&self.board, pos);
        if next == self.board {
            return None;
        }

        debug_assert!(
            BoardInvariants::check_all(&next).is_ok(),
            "board invariants violated"
        );

        self.board = next;
        debug!(status = %self.status(), "Board updated");
        self.watcher.observe(&self.board)
    }

    /// Replaces the board with a fresh one, from any phase.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Game restarted");
        self.board = restart();
        self.watcher.observe(&self.board);
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status of the current board.
    pub fn status(&self) -> Status {
        status(&self.board)
    }

    /// Winner of the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    /// Completed line to highlight, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(&self.board).map(|(line, _)| line)
    }

    /// Mark to move next.
    pub fn current_player(&self) -> Mark {
        self.board.current_player()
    }

    /// Phase of the current board.
    pub fn phase(&self) -> Phase {
        phase(&self.board)
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }
}
