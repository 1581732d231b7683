//! Monthly summary formatting

use crate::reports::MonthlySummary;

use super::separator;

/// Format a monthly summary
pub fn format_monthly_summary(summary: &MonthlySummary, currency: &str) -> String {
    if summary.is_empty() {
        return format!("No expenses for {}.\n", summary.period);
    }

    let mut output = String::new();
    output.push_str(&format!("== Summary for {} ==\n", summary.period));
    output.push_str(&separator());
    output.push_str(&format!(
        "Total spent: {}\n",
        summary.totals.total.format_with_symbol(currency)
    ));
    output.push_str(&format!("Expenses:    {}\n", summary.expense_count));

    output.push_str("\nCategory breakdown:\n");
    for (category, amount) in &summary.totals.by_category {
        output.push_str(&format!(
            "- {}: {}\n",
            category,
            amount.format_with_symbol(currency)
        ));
    }

    if let Some((category, amount)) = &summary.top {
        output.push_str(&format!(
            "\nTop category: {} ({})\n",
            category,
            amount.format_with_symbol(currency)
        ));
    }
    output.push_str(&separator());

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseId, Money, Period};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(id: i64, amount: Money, category: Category) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Expense::new(ExpenseId::new(id), amount, category, "", date)
    }

    #[test]
    fn test_format_summary() {
        let expenses = vec![
            expense(1, Money::new(dec!(100)), Category::Food),
            expense(2, Money::new(dec!(50)), Category::Food),
            expense(3, Money::new(dec!(30)), Category::Bills),
        ];
        let summary = MonthlySummary::generate(&expenses, Period::parse("2024", "01").unwrap());

        let formatted = format_monthly_summary(&summary, "₹");
        assert!(formatted.contains("== Summary for 2024-01 =="));
        assert!(formatted.contains("Total spent: ₹180"));
        assert!(formatted.contains("- Food: ₹150"));
        assert!(formatted.contains("- Bills: ₹30"));
        assert!(formatted.contains("Top category: Food (₹150)"));
        // Breakdown follows catalog order
        let food = formatted.find("- Food").unwrap();
        let bills = formatted.find("- Bills").unwrap();
        assert!(food < bills);
    }

    #[test]
    fn test_format_empty_summary() {
        let summary = MonthlySummary::generate(&[], Period::parse("2024", "03").unwrap());
        assert_eq!(format_monthly_summary(&summary, "₹"), "No expenses for 2024-03.\n");
    }
}
