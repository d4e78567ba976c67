//! Display formatting for terminal output
//!
//! Plain-text renderings of the category map and transaction registers for
//! the CLI commands and the end-of-session summary.

pub mod category;
pub mod transaction;

pub use category::format_category_tree;
pub use transaction::{format_date, format_transaction_register, format_transaction_row};
