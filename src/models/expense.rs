//! Expense model
//!
//! An expense is a single recorded spend: an amount filed under a catalog
//! category, an optional note and the local time it was entered.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// Textual format of `Expense::date`, both on disk and on screen
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (creation time in milliseconds)
    pub id: ExpenseId,

    /// Amount spent; negative values are refunds
    pub amount: Money,

    /// Catalog category
    pub category: Category,

    /// Free-form note, may be empty
    #[serde(default)]
    pub note: String,

    /// When the expense was recorded, second precision
    #[serde(with = "date_format")]
    date: NaiveDateTime,
}

impl Expense {
    /// Create a new expense
    ///
    /// Sub-second precision is dropped from `date` so the in-memory value
    /// matches what is persisted.
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: Category,
        note: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            note: note.into(),
            date: truncate_to_seconds(date),
        }
    }

    /// When the expense was recorded
    ///
    /// There is no setter: the date is fixed at creation.
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// The date rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Check if this expense is a refund
    pub fn is_refund(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date_string(),
            self.category,
            self.amount,
            self.note
        )
    }
}

fn truncate_to_seconds(date: NaiveDateTime) -> NaiveDateTime {
    date.with_nanosecond(0).unwrap_or(date)
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_new_truncates_subseconds() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_milli_opt(9, 30, 15, 789)
            .unwrap();
        let expense = Expense::new(
            ExpenseId::new(1),
            Money::new(dec!(10)),
            Category::Food,
            "",
            date,
        );
        assert_eq!(expense.date(), at(2024, 1, 5, 9, 30, 15));
        assert_eq!(expense.date_string(), "2024-01-05 09:30:15");
    }

    #[test]
    fn test_json_layout() {
        let expense = Expense::new(
            ExpenseId::new(1704447015000),
            Money::new(dec!(120.5)),
            Category::Transport,
            "Taxi",
            at(2024, 1, 5, 9, 30, 15),
        );

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], 1704447015000i64);
        assert_eq!(value["amount"], 120.5);
        assert_eq!(value["category"], "Transport");
        assert_eq!(value["note"], "Taxi");
        assert_eq!(value["date"], "2024-01-05 09:30:15");
    }

    #[test]
    fn test_reads_original_file_format() {
        let json = r#"{
            "id": 1704447015000,
            "amount": 250.0,
            "category": "Bills",
            "note": "Electricity",
            "date": "2024-01-05 09:30:15"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, ExpenseId::new(1704447015000));
        assert_eq!(expense.amount, Money::new(dec!(250)));
        assert_eq!(expense.category, Category::Bills);
        assert_eq!(expense.date(), at(2024, 1, 5, 9, 30, 15));
    }

    #[test]
    fn test_rejects_bad_date() {
        let json = r#"{"id": 1, "amount": 1, "category": "Food", "note": "", "date": "05/01/2024"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn test_negative_amount_is_refund() {
        let expense = Expense::new(
            ExpenseId::new(1),
            Money::new(dec!(-40)),
            Category::Shopping,
            "Returned shoes",
            at(2024, 2, 1, 12, 0, 0),
        );
        assert!(expense.is_refund());
    }
}
