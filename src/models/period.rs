//! Summary period representation
//!
//! A period is a calendar month identified by year and month, e.g. "2024-01".

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExpenseError;

/// A calendar month used to filter expenses for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self, ExpenseError> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::Validation(format!(
                "Month must be between 01 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Parse a period from a 4-digit year and a month
    ///
    /// The month may be zero-padded ("01") or not ("1").
    pub fn parse(year: &str, month: &str) -> Result<Self, ExpenseError> {
        let year_str = year.trim();
        if year_str.len() != 4 || !year_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ExpenseError::Validation(format!(
                "Year must be 4 digits (YYYY), got '{}'",
                year_str
            )));
        }
        let month_str = month.trim();
        if month_str.is_empty()
            || month_str.len() > 2
            || !month_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ExpenseError::Validation(format!(
                "Month must be 01-12, got '{}'",
                month_str
            )));
        }

        let year = year_str
            .parse()
            .map_err(|_| ExpenseError::Validation(format!("Invalid year '{}'", year_str)))?;
        let month = month_str
            .parse()
            .map_err(|_| ExpenseError::Validation(format!("Invalid month '{}'", month_str)))?;

        Self::new(year, month)
    }

    /// Parse the "YYYY-MM" form
    pub fn parse_combined(s: &str) -> Result<Self, ExpenseError> {
        let (year, month) = s.trim().split_once('-').ok_or_else(|| {
            ExpenseError::Validation(format!("Invalid period '{}'. Use YYYY-MM", s))
        })?;
        Self::parse(year, month)
    }

    /// The period containing the given timestamp
    pub fn containing(date: NaiveDateTime) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Check whether a timestamp falls within this period
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
