//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::format_category_menu;
pub use expense::{format_expense_blocks, format_expense_details, format_expense_table};
pub use summary::format_monthly_summary;

const RULE_WIDTH: usize = 60;

/// A horizontal rule followed by a newline
pub fn separator() -> String {
    format!("{}\n", "-".repeat(RULE_WIDTH))
}
