//! History entries: board snapshots with the move that produced them.

use super::position::Position;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// One entry in the game history: a full board snapshot plus the
/// position played to reach it.
///
/// The initial entry has no location - nothing was played to reach
/// the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    location: Option<Position>,
}

impl MoveRecord {
    /// Creates the initial record: empty board, no location.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Creates a record for a played move.
    pub fn new(board: Board, location: Position) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    /// The board snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played, if any.
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    /// 1-indexed `(row, col)` text for the played position.
    pub fn location_label(&self) -> Option<String> {
        self.location
            .map(|pos| format!("({}, {})", pos.row(), pos.col()))
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::initial()
    }
}
