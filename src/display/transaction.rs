//! Transaction display formatting
//!
//! Formats the session's transactions as a register with income, expense
//! and net totals.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{Money, Transaction, TransactionType};

/// Used when the configured date format cannot be rendered
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date, falling back to ISO order if `date_format` is invalid
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    out
}

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let notes = txn.notes.as_deref().unwrap_or("");
    format!(
        "{:10} {:7} {:16} {:>14}  {}",
        format_date(txn.date, date_format),
        txn.kind.label(),
        truncate(&txn.category, 16),
        txn.amount.format_with_symbol(symbol),
        notes
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:16} {:>14}  {}\n",
        "Date", "Type", "Category", "Amount", "Notes"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let mut income = Money::zero();
    let mut expense = Money::zero();

    for txn in transactions {
        match txn.kind {
            TransactionType::Income => income += txn.amount,
            TransactionType::Expense => expense += txn.amount,
        }
        output.push_str(&format_transaction_row(txn, symbol, date_format));
        output.push('\n');
    }

    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:>35} {:>14}\n",
        "Income:",
        income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:>35} {:>14}\n",
        "Expense:",
        expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:>35} {:>14}\n",
        "Net:",
        (income - expense).format_with_symbol(symbol)
    ));

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
