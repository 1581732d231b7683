//! Category catalog
//!
//! Expenses are filed under one of seven fixed categories. The declaration
//! order is the display order, the numbering used by menus, and the order
//! used to break ties in summaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A permitted expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Shopping,
    Health,
    Education,
    Other,
}

const CATALOG: [Category; 7] = [
    Category::Food,
    Category::Transport,
    Category::Bills,
    Category::Shopping,
    Category::Health,
    Category::Education,
    Category::Other,
];

impl Category {
    /// All categories in catalog order
    pub fn all() -> &'static [Category] {
        &CATALOG
    }

    /// Category names in catalog order
    pub fn names() -> Vec<&'static str> {
        CATALOG.iter().map(|c| c.as_str()).collect()
    }

    /// Check whether a name belongs to the catalog (case-insensitive)
    pub fn is_valid(name: &str) -> bool {
        name.parse::<Category>().is_ok()
    }

    /// Look up a category by its 1-based menu number
    pub fn by_index(index: usize) -> Option<Category> {
        index.checked_sub(1).and_then(|i| CATALOG.get(i).copied())
    }

    /// The 1-based menu number of this category
    pub fn index(&self) -> usize {
        CATALOG.iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    /// Resolve user input that is either a menu number or a category name
    pub fn resolve(input: &str) -> Result<Category, ExpenseError> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return Category::by_index(number).ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "Category number must be between 1 and {}, got {}",
                    CATALOG.len(),
                    number
                ))
            });
        }
        input.parse()
    }

    /// The canonical label stored on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CATALOG
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ExpenseError::unknown_category(trimmed))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
