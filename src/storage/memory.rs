//! In-process expense storage

use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::ExpenseBackend;

/// Backend that keeps the collection in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<Vec<Expense>>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with expenses
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            data: RwLock::new(expenses),
        }
    }
}

impl ExpenseBackend for MemoryBackend {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses.to_vec();
        Ok(())
    }
}
