//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in fixed enumeration order:
/// rows, then columns, then diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A detected win: the winning player and the completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerInfo {
    /// The player who completed the line.
    pub winner: Player,
    /// The three positions of the completed line.
    pub line: [Position; 3],
}

impl WinnerInfo {
    /// Checks whether the given position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in enumeration order (rows before
/// columns before diagonals), so the result is well-defined even on
/// boards where several lines are complete at once.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinnerInfo> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(winner) = sq {
                return Some(WinnerInfo { winner, line });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let info = check_winner(&board).expect("top row should win");
        assert_eq!(info.winner, Player::X);
        assert_eq!(
            info.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        let info = check_winner(&board).expect("diagonal should win");
        assert_eq!(info.winner, Player::O);
        assert_eq!(
            info.line,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::TopCenter],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_row_reported_when_two_rows_complete() {
        // Unreachable by normal play, but the function is total over boards.
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        occupy(
            &mut board,
            Player::O,
            &[
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        );
        let info = check_winner(&board).expect("two complete lines");
        assert_eq!(info.winner, Player::X);
        assert_eq!(
            info.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        // X holds both the left column and the main diagonal; columns
        // come before diagonals in the enumeration.
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomRight,
            ],
        );
        let info = check_winner(&board).expect("column and diagonal complete");
        assert_eq!(
            info.line,
            [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft
            ]
        );
    }

    #[test]
    fn test_winning_line_contains() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        let info = check_winner(&board).expect("diagonal should win");
        assert!(info.contains(Position::Center));
        assert!(!info.contains(Position::TopRight));
    }
}
