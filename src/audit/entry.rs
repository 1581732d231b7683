//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense fields were changed
    Update,
    /// Expense was removed
    Delete,
    /// The whole collection was emptied
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Affected expense; absent for `Clear`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<ExpenseId>,

    /// The expense before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    /// The expense after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,

    /// Human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Entry for an added expense
    pub fn create(timestamp: DateTime<Utc>, expense: &Expense) -> Self {
        Self {
            timestamp,
            operation: Operation::Create,
            expense_id: Some(expense.id),
            before: None,
            after: Some(expense.clone()),
            summary: None,
        }
    }

    /// Entry for an updated expense
    pub fn update(
        timestamp: DateTime<Utc>,
        before: &Expense,
        after: &Expense,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            operation: Operation::Update,
            expense_id: Some(after.id),
            before: Some(before.clone()),
            after: Some(after.clone()),
            summary,
        }
    }

    /// Entry for a deleted expense
    pub fn delete(timestamp: DateTime<Utc>, expense: &Expense) -> Self {
        Self {
            timestamp,
            operation: Operation::Delete,
            expense_id: Some(expense.id),
            before: Some(expense.clone()),
            after: None,
            summary: None,
        }
    }

    /// Entry for clearing the collection
    pub fn clear(timestamp: DateTime<Utc>, removed: usize) -> Self {
        Self {
            timestamp,
            operation: Operation::Clear,
            expense_id: None,
            before: None,
            after: None,
            summary: Some(format!("removed {} expenses", removed)),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = self.expense_id {
            output.push_str(&format!(" expense {}", id));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!("\n  Changes: {}", summary));
        }

        output
    }
}
