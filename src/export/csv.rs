//! CSV Export functionality
//!
//! Exports expenses as `id,date,amount,category,note`, one row per expense.

use std::io::Write;

use chrono::NaiveDateTime;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Column names of the export, in order
pub const CSV_HEADER: [&str; 5] = ["id", "date", "amount", "category", "note"];

/// Materialize expenses as table rows, header row first
pub fn expense_rows(expenses: &[Expense]) -> Vec<[String; 5]> {
    let mut rows = Vec::with_capacity(expenses.len() + 1);
    rows.push(CSV_HEADER.map(String::from));
    rows.extend(expenses.iter().map(|e| {
        [
            e.id.to_string(),
            e.date_string(),
            e.amount.to_string(),
            e.category.to_string(),
            e.note.clone(),
        ]
    }));
    rows
}

/// Write expenses as CSV, in the order given
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for row in expense_rows(expenses) {
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Default export file name, e.g. `expenses_20240115_093000.csv`
pub fn export_file_name(now: NaiveDateTime) -> String {
    format!("expenses_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(ExpenseId::new(11), Money::new(dec!(100)), Category::Food, "Groceries", at(2)),
            Expense::new(
                ExpenseId::new(12),
                Money::new(dec!(12.5)),
                Category::Transport,
                "Bus, then \"metro\"",
                at(3),
            ),
        ]
    }

    #[test]
    fn test_rows_header_first() {
        let rows = expense_rows(&sample());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], CSV_HEADER.map(String::from));
        assert_eq!(
            rows[1],
            ["11", "2024-01-02 09:30:00", "100", "Food", "Groceries"].map(String::from)
        );
    }

    #[test]
    fn test_rows_for_empty_collection() {
        let rows = expense_rows(&[]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_write_csv_quotes_fields() {
        let mut buffer = Vec::new();
        write_expenses_csv(&sample(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "id,date,amount,category,note");
        assert_eq!(lines[1], "11,2024-01-02 09:30:00,100,Food,Groceries");
        assert_eq!(
            lines[2],
            "12,2024-01-03 09:30:00,12.5,Transport,\"Bus, then \"\"metro\"\"\""
        );
    }

    #[test]
    fn test_export_file_name() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(export_file_name(now), "expenses_20240115_090507.csv");
    }
}
