//! Category map
//!
//! Categories are plain names bucketed by transaction type. The map is a
//! value: every change produces a new map, and the list for the type that
//! was not touched is shared with the previous map.

use std::rc::Rc;

use super::transaction::TransactionType;

/// Income and expense category names, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    income: Rc<Vec<String>>,
    expense: Rc<Vec<String>>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new(
            ["Salary", "Business", "Investment"],
            ["Food", "Rent", "Utilities"],
        )
    }
}

impl CategoryMap {
    /// Build a map from the two lists
    pub fn new<I, E>(income: I, expense: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            income: Rc::new(income.into_iter().map(Into::into).collect()),
            expense: Rc::new(expense.into_iter().map(Into::into).collect()),
        }
    }

    /// Names for one type
    pub fn get(&self, kind: TransactionType) -> &[String] {
        self.list(kind).as_slice()
    }

    fn list(&self, kind: TransactionType) -> &Rc<Vec<String>> {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    /// True if both maps hold the very same list for `kind`
    pub fn shares_list(&self, other: &CategoryMap, kind: TransactionType) -> bool {
        Rc::ptr_eq(self.list(kind), other.list(kind))
    }

    /// A new map with `kind` replaced by `names`
    pub fn with_list(&self, kind: TransactionType, names: Vec<String>) -> Self {
        let names = Rc::new(names);
        match kind {
            TransactionType::Income => Self {
                income: names,
                expense: Rc::clone(&self.expense),
            },
            TransactionType::Expense => Self {
                income: Rc::clone(&self.income),
                expense: names,
            },
        }
    }

    /// A new map with `name` appended to `kind`
    pub fn with_appended(&self, kind: TransactionType, name: impl Into<String>) -> Self {
        let mut names = self.get(kind).to_vec();
        names.push(name.into());
        self.with_list(kind, names)
    }

    /// A new map without the entry at `index`, or `None` if out of range
    pub fn with_removed(&self, kind: TransactionType, index: usize) -> Option<Self> {
        if index >= self.get(kind).len() {
            return None;
        }
        let mut names = self.get(kind).to_vec();
        names.remove(index);
        Some(self.with_list(kind, names))
    }

    /// A new map with the entry at `index` renamed, or `None` if out of range
    pub fn with_replaced(
        &self,
        kind: TransactionType,
        index: usize,
        name: impl Into<String>,
    ) -> Option<Self> {
        let mut names = self.get(kind).to_vec();
        let slot = names.get_mut(index)?;
        *slot = name.into();
        Some(self.with_list(kind, names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let map = CategoryMap::default();
        assert_eq!(
            map.get(TransactionType::Income),
            &["Salary", "Business", "Investment"]
        );
        assert_eq!(map.get(TransactionType::Expense), &["Food", "Rent", "Utilities"]);
    }

    #[test]
    fn test_append_allows_duplicates() {
        let map = CategoryMap::default()
            .with_appended(TransactionType::Expense, "Food")
            .with_appended(TransactionType::Expense, "Gifts");
        assert_eq!(
            map.get(TransactionType::Expense),
            &["Food", "Rent", "Utilities", "Food", "Gifts"]
        );
    }

    #[test]
    fn test_remove() {
        let map = CategoryMap::default();
        let updated = map.with_removed(TransactionType::Expense, 1).unwrap();
        assert_eq!(updated.get(TransactionType::Expense), &["Food", "Utilities"]);
        assert!(map.with_removed(TransactionType::Expense, 3).is_none());
    }

    #[test]
    fn test_replace() {
        let map = CategoryMap::default();
        let updated = map
            .with_replaced(TransactionType::Income, 2, "Dividends")
            .unwrap();
        assert_eq!(
            updated.get(TransactionType::Income),
            &["Salary", "Business", "Dividends"]
        );
        assert!(map.with_replaced(TransactionType::Income, 9, "x").is_none());
    }

    #[test]
    fn test_untouched_list_is_shared() {
        let map = CategoryMap::default();
        let updated = map.with_appended(TransactionType::Income, "Gifts");

        assert!(updated.shares_list(&map, TransactionType::Expense));
        assert!(!updated.shares_list(&map, TransactionType::Income));
        // Original is untouched
        assert_eq!(map.get(TransactionType::Income).len(), 3);
    }
}
