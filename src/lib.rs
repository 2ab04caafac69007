//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Engine** ([`Game`]): owns the history of board snapshots, the
//!   current-move pointer, turn computation, and win/draw detection.
//! - **TUI** ([`run_tui`]): renders the board and move list from engine
//!   queries and forwards key presses into engine operations.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! // Time travel: jump back, then branch.
//! game.jump_to(1);
//! game.play(Position::TopRight);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod tictactoe;
mod tui;

pub use tictactoe::{
    Board, Game, GameStatus, MoveRecord, Player, Position, SortOrder, Square, WinnerInfo,
    check_winner, is_draw,
};
pub use tui::run_tui;
