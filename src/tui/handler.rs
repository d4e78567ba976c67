//! Event handler for the TUI
//!
//! Routes keyboard events to the alert, the open dialog or the active view,
//! in that order.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::dialogs;
use super::event::Event;
use super::views;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Alerts block everything else
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::AddTransaction => {
            dialogs::transaction::handle_key(app, key);
            return Ok(());
        }
        ActiveDialog::None => {}
    }

    let typing = app.input_mode == InputMode::Editing || app.category_manager.is_editing();
    if !typing && handle_global_key(app, key) {
        return Ok(());
    }

    match app.active_view {
        ActiveView::Categories => {
            views::categories::handle_key(app, key);
        }
        ActiveView::Transactions => handle_transactions_key(app, key),
    }

    Ok(())
}

/// Keys that work in every view while not typing
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('1') => app.switch_view(ActiveView::Categories),
        KeyCode::Char('2') => app.switch_view(ActiveView::Transactions),
        KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddTransaction),
        _ => return false,
    }
    true
}

fn handle_transactions_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddTransaction),
        _ => {}
    }
}
