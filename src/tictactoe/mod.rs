//! Tic-tac-toe engine: board, history, and win detection.

mod game;
mod position;
mod record;
mod rules;
mod types;

pub use game::{Game, SortOrder};
pub use position::Position;
pub use record::MoveRecord;
pub use rules::{WinnerInfo, check_winner, is_draw};
pub use types::{Board, GameStatus, Player, Square};
