//! Terminal UI: pull-based render loop over the game engine.
//!
//! After every input event the loop re-queries the engine and redraws.
//! One event is processed to completion before the next is read; the
//! engine never runs concurrently with itself.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{info, instrument};

use crate::tictactoe::SortOrder;
use app::App;

/// Runs the TUI until the user quits.
pub fn run_tui(sort_order: SortOrder) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, App::new(sort_order));
    ratatui::restore();

    info!("TUI exited");
    result
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
