//! Game engine: snapshot history, current-move pointer, and turn logic.

use super::position::Position;
use super::record::MoveRecord;
use super::rules::{WinnerInfo, check_winner, is_draw};
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the rendered move list.
///
/// Controls presentation only; the underlying history order never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// A tic-tac-toe game with linear time-travel history.
///
/// The history is a list of board snapshots; entry 0 is the empty
/// board. `current_move` selects which snapshot is live. Playing from
/// an earlier snapshot discards the entries after it, like undo
/// followed by a new edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vec<MoveRecord>,
    current: usize,
    sort_order: SortOrder,
}

impl Game {
    /// Creates a new game: one empty snapshot, ascending move list.
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            current: 0,
            sort_order,
        }
    }

    /// The currently displayed board snapshot.
    pub fn board(&self) -> &Board {
        self.history[self.current].board()
    }

    /// The full snapshot history, in play order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Current move-list display order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The player to move at the displayed snapshot. X moves on even
    /// indices, O on odd.
    pub fn next_player(&self) -> Player {
        if self.current % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Winner on the displayed board, with the completed line.
    pub fn winner(&self) -> Option<WinnerInfo> {
        check_winner(self.board())
    }

    /// Status of the displayed board: won, drawn, or in progress.
    pub fn status(&self) -> GameStatus {
        if let Some(info) = self.winner() {
            GameStatus::Won(info.winner)
        } else if is_draw(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Ignored (no state change) if the displayed board already has a
    /// winner or the square is occupied. Otherwise the history is
    /// truncated to the displayed snapshot, the new snapshot appended,
    /// and the current-move pointer advanced to it.
    #[instrument(skip(self), fields(position = %pos, current = self.current))]
    pub fn play(&mut self, pos: Position) {
        if self.winner().is_some() || !self.board().is_empty(pos) {
            debug!("Ignoring play: game over or square occupied");
            return;
        }

        let mover = self.next_player();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(mover));

        self.history.truncate(self.current + 1);
        self.history.push(MoveRecord::new(board, pos));
        self.current = self.history.len() - 1;
        debug!(player = %mover, history_len = self.history.len(), "Move applied");
    }

    /// Jumps to an earlier or later snapshot. The history is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The presentation layer only
    /// offers valid indices, so a violation is a collaborator bug.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.history.len(),
            "jump_to index {index} out of range (history length {})",
            self.history.len()
        );
        self.current = index;
        debug!("Jumped to move");
    }

    /// Resets to a fresh game, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = vec![MoveRecord::initial()];
        self.current = 0;
        debug!("Game reset");
    }

    /// Flips the move-list display order.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Move-list text for the history entry at `index`.
    ///
    /// Entries render as `Go to move #N (row, col)`, the initial entry
    /// as `Go to game start`, and the displayed entry as
    /// `You are at move #N (row, col)`.
    pub fn move_description(&self, index: usize) -> String {
        let record = &self.history[index];
        if index == self.current {
            match record.location_label() {
                Some(loc) => format!("You are at move #{index} {loc}"),
                None => format!("You are at move #{index}"),
            }
        } else if index == 0 {
            "Go to game start".to_string()
        } else {
            match record.location_label() {
                Some(loc) => format!("Go to move #{index} {loc}"),
                None => format!("Go to move #{index}"),
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
