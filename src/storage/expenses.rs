//! Expense file backend
//!
//! Persists the collection to data.json as a top-level JSON array.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseBackend;

/// JSON file backed expense storage
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the given data file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JsonFileBackend {
    /// First well-formed amount in the file that `Money` cannot hold
    ///
    /// Such a file is valid data, so it must not be recovered as empty and
    /// then overwritten.
    fn out_of_range_amount(&self) -> ExpenseResult<Option<String>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let Ok(records) = serde_json::from_str::<Vec<serde_json::Value>>(&raw) else {
            return Ok(None);
        };

        Ok(records
            .iter()
            .filter_map(|record| record.get("amount")?.as_number())
            .find(|number| Money::from_json_number(number).is_err())
            .map(|number| number.to_string()))
    }
}

impl ExpenseBackend for JsonFileBackend {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        match read_json::<Vec<Expense>, _>(&self.path) {
            Ok(expenses) => {
                debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
                Ok(expenses)
            }
            Err(ExpenseError::Parse(reason)) => {
                if let Some(amount) = self.out_of_range_amount()? {
                    return Err(ExpenseError::Storage(format!(
                        "{} holds amount {}, which is outside the supported range",
                        self.path.display(),
                        amount
                    )));
                }
                warn!(path = %self.path.display(), %reason, "unreadable expense data, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, expenses)?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_backend() -> (TempDir, JsonFileBackend) {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path().join("data.json"));
        (temp_dir, backend)
    }

    fn sample(id: i64, day: u32, category: Category) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Expense::new(ExpenseId::new(id), Money::new(dec!(12.5)), category, "note", date)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp_dir, backend) = create_test_backend();
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, backend) = create_test_backend();
        let expenses = vec![
            sample(3, 20, Category::Bills),
            sample(1, 5, Category::Food),
            sample(2, 10, Category::Health),
        ];

        backend.save(&expenses).unwrap();
        assert_eq!(backend.load().unwrap(), expenses);
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let (_temp_dir, backend) = create_test_backend();
        std::fs::write(backend.path(), "[{\"id\": 1, \"amount\": ").unwrap();
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_in_file_is_empty() {
        let (_temp_dir, backend) = create_test_backend();
        std::fs::write(
            backend.path(),
            r#"[{"id": 1, "amount": 5, "category": "Rent", "note": "", "date": "2024-01-01 00:00:00"}]"#,
        )
        .unwrap();
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_amount_is_error_not_empty() {
        let (_temp_dir, backend) = create_test_backend();
        let raw = r#"[
    {"id": 1, "amount": 1e30, "category": "Food", "note": "", "date": "2024-01-01 00:00:00"},
    {"id": 2, "amount": 5.0, "category": "Food", "note": "", "date": "2024-01-02 00:00:00"}
]"#;
        std::fs::write(backend.path(), raw).unwrap();

        let err = backend.load().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(err.to_string().contains("1e30"));
        assert_eq!(std::fs::read_to_string(backend.path()).unwrap(), raw);
    }

    #[test]
    fn test_large_amount_round_trips_exactly() {
        let (_temp_dir, backend) = create_test_backend();
        let mut expense = sample(1, 1, Category::Food);
        expense.amount = Money::parse("12345678901234567.89").unwrap();

        backend.save(std::slice::from_ref(&expense)).unwrap();
        let loaded = backend.load().unwrap();
        assert_eq!(loaded, vec![expense]);
    }

    #[test]
    fn test_reads_original_layout() {
        let (_temp_dir, backend) = create_test_backend();
        std::fs::write(
            backend.path(),
            r#"[
    {
        "id": 1704447015000,
        "amount": 250.0,
        "category": "Bills",
        "note": "Electricity",
        "date": "2024-01-05 09:30:15"
    }
]"#,
        )
        .unwrap();

        let expenses = backend.load().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, Category::Bills);
        assert_eq!(expenses[0].amount, Money::new(dec!(250)));
    }

    #[test]
    fn test_file_is_top_level_array() {
        let (_temp_dir, backend) = create_test_backend();
        backend.save(&[sample(1, 1, Category::Food)]).unwrap();

        let raw = std::fs::read_to_string(backend.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["date"], "2024-01-01 10:00:00");
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let (temp_dir, _backend) = create_test_backend();
        // A directory where the data file should be cannot be opened as JSON
        let dir_path = temp_dir.path().join("data.json");
        std::fs::create_dir(&dir_path).unwrap();
        let backend = JsonFileBackend::new(dir_path);

        assert!(backend.load().is_err());
    }
}
