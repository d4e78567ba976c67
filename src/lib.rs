//! Tally - a terminal personal finance tracker
//!
//! This library provides the pieces behind the `tally` binary: a form for
//! recording income and expense transactions, a manager for the per-type
//! category lists, and the ratatui dashboard that ties them together.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (transactions, money, category map)
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::TallyError;
