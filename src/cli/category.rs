//! Category CLI commands
//!
//! Prints the default category map, optionally narrowed to one type.

use clap::Args;

use crate::display::category::format_category_tree;
use crate::error::TallyResult;
use crate::models::{CategoryMap, TransactionType};

/// Arguments for `tally categories`
#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Only list categories of this type
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: Option<TransactionType>,
}

/// Handle the categories command
pub fn handle_categories_command(args: CategoryArgs) -> TallyResult<()> {
    print!("{}", render_categories(&args));
    Ok(())
}

fn render_categories(args: &CategoryArgs) -> String {
    format_category_tree(&CategoryMap::default(), args.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_types() {
        let output = render_categories(&CategoryArgs { kind: None });
        assert!(output.contains("Salary"));
        assert!(output.contains("Utilities"));
    }

    #[test]
    fn test_render_filtered() {
        let output = render_categories(&CategoryArgs {
            kind: Some(TransactionType::Income),
        });
        assert!(output.contains("Business"));
        assert!(!output.contains("Rent"));
    }
}
