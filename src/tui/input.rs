//! Keyboard input mapping.

use cats_game_rules::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by (row, col) steps.
    Cursor(isize, isize),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a specific cell.
    Select(Position),
    /// Start a fresh game.
    Restart,
    /// Close the game-over dialog.
    CloseDialog,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key event to an action.
///
/// While the dialog is open, only dialog keys, restart and quit apply.
pub fn action_for(key: KeyEvent, dialog_open: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if dialog_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char(' ') => {
                Action::CloseDialog
            }
            KeyCode::Char('r') => Action::Restart,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectCursor,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Select),
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// Moves the cursor, stopping at the board edges.
pub fn move_cursor(cursor: Position, d_row: isize, d_col: isize) -> Position {
    let row = (cursor.row() as isize + d_row).clamp(0, 2) as usize;
    let col = (cursor.col() as isize + d_col).clamp(0, 2) as usize;
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, 0, 1), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, -1, 0), Position::TopCenter);
        assert_eq!(move_cursor(Position::BottomLeft, 0, -1), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, -1, 1), Position::TopRight);
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            action_for(key(KeyCode::Char('1')), false),
            Action::Select(Position::TopLeft)
        );
        assert_eq!(
            action_for(key(KeyCode::Char('9')), false),
            Action::Select(Position::BottomRight)
        );
        assert_eq!(action_for(key(KeyCode::Char('0')), false), Action::Ignore);
    }

    #[test]
    fn test_dialog_captures_keys() {
        assert_eq!(action_for(key(KeyCode::Esc), true), Action::CloseDialog);
        assert_eq!(action_for(key(KeyCode::Char('5')), true), Action::Ignore);
        assert_eq!(action_for(key(KeyCode::Esc), false), Action::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(event, true), Action::Quit);
    }
}
