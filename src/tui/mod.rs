//! Terminal User Interface module
//!
//! A ratatui front end with two views: the category manager and the list of
//! transactions recorded this session, plus the transaction entry dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
