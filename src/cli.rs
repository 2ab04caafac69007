//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Tic-Tac-Toe Replay - terminal tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file path (logs go to a file so they don't corrupt the TUI)
    #[arg(long, default_value = "tictactoe_replay.log")]
    pub log_file: PathBuf,

    /// Start with the move list sorted latest-first
    #[arg(long)]
    pub descending: bool,
}
