//! Change summaries for audit logging

use crate::models::Expense;

/// Describe which editable fields differ between two versions of an expense
///
/// Returns `None` when nothing changed.
pub fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }
    if before.note != after.note {
        changes.push(format!(
            "note: {} -> {}",
            quote(&before.note),
            quote(&after.note)
        ));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn quote(s: &str) -> String {
    if s.chars().count() > 50 {
        let head: String = s.chars().take(47).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Expense::new(ExpenseId::new(1), Money::new(dec!(10)), Category::Food, "Tea", date)
    }

    #[test]
    fn test_no_changes() {
        let expense = sample();
        assert_eq!(describe_changes(&expense, &expense.clone()), None);
    }

    #[test]
    fn test_category_and_note_changes() {
        let before = sample();
        let mut after = before.clone();
        after.category = Category::Bills;
        after.note = "Water".into();

        assert_eq!(
            describe_changes(&before, &after).unwrap(),
            "category: Food -> Bills, note: \"Tea\" -> \"Water\""
        );
    }

    #[test]
    fn test_long_note_truncated() {
        let before = sample();
        let mut after = before.clone();
        after.note = "x".repeat(80);

        let summary = describe_changes(&before, &after).unwrap();
        assert!(summary.ends_with("...\""));
    }
}
