//! Category display formatting
//!
//! Formats the category map as a tree grouped by transaction type.

use crate::models::{CategoryMap, TransactionType};

/// Format categories as a tree, one branch per transaction type
///
/// When `only` is set, just that type's branch is printed.
pub fn format_category_tree(categories: &CategoryMap, only: Option<TransactionType>) -> String {
    let kinds: Vec<TransactionType> = match only {
        Some(kind) => vec![kind],
        None => TransactionType::ALL.to_vec(),
    };

    let mut output = String::new();

    for (i, kind) in kinds.iter().enumerate() {
        output.push_str(&format!("{}\n", kind.label()));

        let names = categories.get(*kind);
        if names.is_empty() {
            output.push_str("  (no categories)\n");
        } else {
            for (j, name) in names.iter().enumerate() {
                let prefix = if j == names.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                output.push_str(&format!("  {}{}\n", prefix, name));
            }
        }

        if i < kinds.len() - 1 {
            output.push('\n');
        }
    }

    output
}
