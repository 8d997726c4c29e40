//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if a mark occupies this square.
    pub fn is_occupied(self) -> bool {
        matches!(self, Square::Occupied(_))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always exactly nine squares in row-major order. Boards are values:
/// every move produces a new board and leaves the old one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `square`.
    ///
    /// This bypasses the rules entirely; use [`Board::select_square`] for play.
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_occupied()).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, "{}", idx + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Input did not contain exactly nine cells.
    #[display("expected 9 cells, found {}", found)]
    WrongLength {
        /// Number of cells found.
        found: usize,
    },

    /// A cell character was not recognised.
    #[display("invalid cell character '{}' at cell {}", character, cell)]
    InvalidCell {
        /// The offending character.
        character: char,
        /// Zero-based cell index.
        cell: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`, `O` and `.`/`-`/`_` (empty) cells; whitespace, `|` and `/`
    /// are separators. `"XO./.X./..O"` is a valid board.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength { found: cells.len() });
        }

        let mut board = Board::new();
        for (cell, (character, pos)) in cells.into_iter().zip(Position::ALL).enumerate() {
            let square = match character {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                _ => return Err(BoardParseError::InvalidCell { character, cell }),
            };
            board = board.with(pos, square);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Square::Occupied(Mark::X));
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "XO.|.X.|..O".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Mark::O));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength { found: 2 })
        );
    }

    #[test]
    fn test_parse_invalid_cell() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(BoardParseError::InvalidCell {
                character: 'Z',
                cell: 3
            })
        );
    }

    #[test]
    fn test_mark_display_and_opponent() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
