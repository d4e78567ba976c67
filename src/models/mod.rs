//! Core data models for Tally
//!
//! Transactions, their amounts and ids, and the category map.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::CategoryMap;
pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionType};
