//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning triples, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in scan order held entirely by one mark.
#[instrument]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Mark)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((line, mark))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the mark owning the first complete line,
/// `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}

/// Every mark that owns at least one complete line.
///
/// A board reached through legal play never yields more than one.
pub fn line_owners(board: &Board) -> Vec<Mark> {
    let mut owners = Vec::new();
    for [a, b, c] in LINES {
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == board.get(a)
            && board.get(c) == board.get(a)
            && !owners.contains(&mark)
        {
            owners.push(mark);
        }
    }
    owners
}
