//! Monthly Summary
//!
//! Totals and per-category breakdown of the expenses recorded in one month.

use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money, Period};

/// Totals over a set of expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    /// Sum of all amounts
    pub total: Money,
    /// Sum per category present; iterates in catalog order
    pub by_category: BTreeMap<Category, Money>,
}

/// Keep the expenses dated within `period`
pub fn filter_by_period<'a>(expenses: &'a [Expense], period: &Period) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| period.contains(e.date()))
        .collect()
}

/// Sum amounts overall and per category
///
/// Categories with no expenses are omitted, not zero-filled.
pub fn summarize<'a, I>(expenses: I) -> CategorySummary
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut summary = CategorySummary::default();
    for expense in expenses {
        summary.total += expense.amount;
        *summary
            .by_category
            .entry(expense.category)
            .or_insert_with(Money::zero) += expense.amount;
    }
    summary
}

/// The category with the largest total
///
/// Ties go to the category that comes first in the catalog. Returns `None`
/// for an empty breakdown.
pub fn top_category(by_category: &BTreeMap<Category, Money>) -> Option<(Category, Money)> {
    let mut top: Option<(Category, Money)> = None;
    for (&category, &amount) in by_category {
        match top {
            Some((_, best)) if amount <= best => {}
            _ => top = Some((category, amount)),
        }
    }
    top
}

/// Summary of one month, ready for display
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// The month summarized
    pub period: Period,
    /// Number of expenses in the month
    pub expense_count: usize,
    /// Totals
    pub totals: CategorySummary,
    /// Largest category and its total, if any expenses were found
    pub top: Option<(Category, Money)>,
}

impl MonthlySummary {
    /// Generate the summary for `period`
    pub fn generate(expenses: &[Expense], period: Period) -> Self {
        let filtered = filter_by_period(expenses, &period);
        let totals = summarize(filtered.iter().copied());
        let top = top_category(&totals.by_category);

        Self {
            period,
            expense_count: filtered.len(),
            totals,
            top,
        }
    }

    /// Check whether the month has no expenses
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }
}
