//! Expense display formatting
//!
//! Register table and detail views of expenses.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::separator;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date_string(),
        amount: e.amount.format_with_symbol(currency),
        category: e.category.to_string(),
        note: truncate(&e.note, 40),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}

/// Format expenses as stacked detail blocks separated by rules
pub fn format_expense_blocks(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&separator());
    for expense in expenses {
        output.push_str(&format_expense_details(expense, currency));
        output.push_str(&separator());
    }
    output
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date_string()));
    let refund = if expense.is_refund() { " (refund)" } else { "" };
    output.push_str(&format!(
        "Amount:   {}{}\n",
        expense.amount.format_with_symbol(currency),
        refund
    ));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Note:     {}\n", expense.note));
    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}
