//! Application state and logic.

use super::input::{Action, move_cursor};
use cats_game_rules::{GameState, Position, WinNotice};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    dialog: Option<WinNotice>,
    show_dialog: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_dialog: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            dialog: None,
            show_dialog,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Open game-over dialog, if any.
    pub fn dialog(&self) -> Option<&WinNotice> {
        self.dialog.as_ref()
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Cursor(d_row, d_col) => {
                self.cursor = move_cursor(self.cursor, d_row, d_col);
            }
            Action::SelectCursor => self.select(self.cursor),
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::Restart => {
                self.game.restart();
                self.dialog = None;
            }
            Action::CloseDialog => self.dialog = None,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
    }

    fn select(&mut self, pos: Position) {
        if let Some(notice) = self.game.select_square(pos) {
            info!(winner = %notice.winner(), "Game over");
            if self.show_dialog {
                self.dialog = Some(notice);
            }
        }
    }
}
