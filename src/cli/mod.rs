//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the display layer.

pub mod category;

pub use category::{handle_categories_command, CategoryArgs};
