//! Category display formatting

use crate::models::Category;

/// Numbered category list, e.g. "1. Food"
pub fn format_category_menu() -> String {
    Category::all()
        .iter()
        .map(|c| format!("{}. {}\n", c.index(), c))
        .collect()
}
