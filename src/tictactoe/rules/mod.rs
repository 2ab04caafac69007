//! Win and draw detection rules.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{WinnerInfo, check_winner};
