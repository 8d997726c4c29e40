//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`]. Nothing here is cached: the
//! next player, the winner and the status are recomputed from the squares
//! on every call.

pub mod draw;
pub mod moves;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_scratch};
pub use moves::{restart, select_square};
pub use turn::current_player;
pub use win::{LINES, line_owners, winner, winning_line};

use crate::{Board, Mark, Position};

impl Board {
    /// Returns a new board with the current player's mark at `pos`.
    ///
    /// See [`select_square`].
    pub fn select_square(&self, pos: Position) -> Board {
        select_square(self, pos)
    }

    /// Mark to move next.
    pub fn current_player(&self) -> Mark {
        current_player(self)
    }

    /// Mark owning the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }
}
