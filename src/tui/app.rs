//! Application state and logic.

use super::input;
use crate::tictactoe::{Game, Position, SortOrder};
use crossterm::event::KeyCode;
use tracing::debug;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board grid.
    Board,
    /// The move-history list.
    MoveList,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    list_cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move-list order.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: Game::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            list_cursor: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The selected row in the displayed move list.
    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Maps a move-list row (display order) to a history index.
    pub fn history_index_at(&self, row: usize) -> usize {
        match self.game.sort_order() {
            SortOrder::Ascending => row,
            SortOrder::Descending => self.game.history().len() - 1 - row,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, focus = ?self.focus, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.game.reset();
                self.list_cursor = 0;
            }
            KeyCode::Char('s') => self.game.toggle_sort_order(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::MoveList,
                    Focus::MoveList => Focus::Board,
                };
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::MoveList => self.handle_list_key(key),
            },
        }

        // A play from mid-history shrinks the list under the selection.
        self.list_cursor = self.list_cursor.min(self.game.history().len() - 1);
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.game.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(pos) = digit.checked_sub(1).and_then(Position::from_index) {
                    self.game.play(pos);
                }
            }
            key => self.cursor = input::move_cursor(self.cursor, key),
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.list_cursor = self.list_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.list_cursor = (self.list_cursor + 1).min(self.game.history().len() - 1);
            }
            KeyCode::Enter => {
                let index = self.history_index_at(self.list_cursor);
                // The current entry is plain text, not a jump target.
                if index != self.game.current_move() {
                    self.game.jump_to(index);
                }
            }
            _ => {}
        }
    }
}
