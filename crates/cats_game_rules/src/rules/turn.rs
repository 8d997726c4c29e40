//! Turn order: X moves on even fill counts, O on odd.

use crate::{Board, Mark};
use tracing::instrument;

/// Returns the mark that moves next on `board`.
///
/// Derived purely from the number of occupied squares, never stored.
#[instrument]
pub fn current_player(board: &Board) -> Mark {
    if board.filled_count() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}
