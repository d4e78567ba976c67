//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use tracing::info;

use crate::config::settings::Settings;
use crate::error::TallyError;
use crate::models::Transaction;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Returns the transactions recorded during the session.
pub fn run_tui(settings: &Settings) -> Result<Vec<Transaction>> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(10)));

    info!("tui started");
    let outcome = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    outcome?;

    let transactions = app.transactions();
    info!(count = transactions.len(), "tui stopped");
    Ok(transactions)
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        let event = events.next().map_err(TallyError::from)?;
        handle_event(app, event)?;
    }
    Ok(())
}
