//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the active view

pub mod alert;
pub mod transaction;
