//! Transaction model
//!
//! A transaction is one recorded income or expense event. Transactions are
//! only created by a successful form submission and never change afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether money came in or went out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    /// Both types, in display order
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The other type
    pub fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Capitalized label
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Category choices offered by the transaction form for this type
    pub fn form_categories(self) -> &'static [&'static str] {
        match self {
            Self::Income => &["Salary", "Business", "Investment"],
            Self::Expense => &["Food", "Rent", "Utilities", "Entertainment"],
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub amount: Money,

    pub date: NaiveDate,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Create a transaction with a freshly issued id
    ///
    /// Notes that are blank after trimming are stored as `None`.
    pub fn new(
        kind: TransactionType,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        let notes = notes.into();
        Self {
            id: TransactionId::generate(),
            kind,
            amount,
            date,
            category: category.into(),
            notes: if notes.trim().is_empty() {
                None
            } else {
                Some(notes)
            },
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionType::Income,
            Money::from_units(5000),
            jan_first(),
            "Salary",
            "",
        );
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.amount, Money::from_units(5000));
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.notes, None);
    }

    #[test]
    fn test_notes_kept_as_typed() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_units(20),
            jan_first(),
            "Food",
            " lunch ",
        );
        assert_eq!(txn.notes.as_deref(), Some(" lunch "));

        let blank = Transaction::new(
            TransactionType::Expense,
            Money::from_units(20),
            jan_first(),
            "Food",
            " \t\n",
        );
        assert_eq!(blank.notes, None);
    }

    #[test]
    fn test_type_helpers() {
        assert_eq!(TransactionType::Income.toggle(), TransactionType::Expense);
        assert_eq!(TransactionType::Expense.toggle(), TransactionType::Income);
        assert_eq!(TransactionType::Expense.label(), "Expense");
        assert_eq!(
            TransactionType::Expense.form_categories(),
            &["Food", "Rent", "Utilities", "Entertainment"]
        );
    }

    #[test]
    fn test_serialization_shape() {
        let txn = Transaction::new(
            TransactionType::Income,
            Money::from_units(5000),
            jan_first(),
            "Salary",
            "",
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["amount"], 500000);
        assert!(value.get("notes").is_none());

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, txn);
    }
}
