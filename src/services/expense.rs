//! Expense service
//!
//! Owns the expense collection on top of a storage backend. Every operation
//! loads the full collection, and every mutating operation writes the full
//! collection back. Ids are unique within the store; categories always come
//! from the catalog; dates are set once at creation.

use tracing::{info, warn};

use crate::audit::{describe_changes, AuditEntry, AuditLogger};
use crate::clock::{Clock, SystemClock};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::storage::ExpenseBackend;

/// Field changes requested for an expense
///
/// Each field is independently optional. Amount and note are raw user input:
/// blank or whitespace-only values are treated as not supplied.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
}

impl ExpenseUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set a new category (name or menu number)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set a new note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A supplied field that was skipped because it was invalid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRejection {
    pub field: &'static str,
    pub input: String,
    pub reason: String,
}

/// Result of an update
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The expense as persisted
    pub expense: Expense,
    /// Whether any field actually changed
    pub changed: bool,
    /// Supplied fields that were skipped
    pub rejected: Vec<FieldRejection>,
}

/// Service for expense management
pub struct ExpenseService<B, C = SystemClock> {
    backend: B,
    clock: C,
    audit: Option<AuditLogger>,
}

impl<B: ExpenseBackend> ExpenseService<B, SystemClock> {
    /// Create a service using the system clock
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: ExpenseBackend, C: Clock> ExpenseService<B, C> {
    /// Create a service with an explicit clock
    pub fn with_clock(backend: B, clock: C) -> Self {
        Self {
            backend,
            clock,
            audit: None,
        }
    }

    /// Attach an audit logger; every successful mutation is appended to it
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// The clock used for new expenses
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Read the full collection, in stored order
    pub fn load_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.backend.load()
    }

    /// Replace the full collection
    pub fn save_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        self.backend.save(expenses)
    }

    /// Record a new expense
    ///
    /// Fails with `ExpenseError::Validation` if `category` is not in the
    /// catalog, in which case nothing is written.
    pub fn add(
        &self,
        amount: Money,
        category: &str,
        note: impl Into<String>,
    ) -> ExpenseResult<Expense> {
        let category: Category = category.parse()?;

        let mut expenses = self.load_all()?;
        let id = unique_id(&expenses, ExpenseId::new(self.clock.now_millis()));
        let expense = Expense::new(id, amount, category, note, self.clock.now());

        expenses.push(expense.clone());
        self.save_all(&expenses)?;

        info!(id = %expense.id, category = %expense.category, amount = %expense.amount, "added expense");
        self.record(AuditEntry::create(self.clock.now_utc(), &expense));

        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let expenses = self.load_all()?;
        Ok(find_by_id(&expenses, id).cloned())
    }

    /// Apply the supplied fields to an existing expense
    ///
    /// An unknown category fails the whole update. An amount that does not
    /// parse is skipped and reported in `UpdateOutcome::rejected` while the
    /// remaining fields are still applied.
    pub fn update(&self, id: ExpenseId, changes: ExpenseUpdate) -> ExpenseResult<UpdateOutcome> {
        let mut expenses = self.load_all()?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let new_category = match changes.category.as_deref().map(str::trim) {
            Some(input) if !input.is_empty() => Some(Category::resolve(input)?),
            _ => None,
        };

        let before = expense.clone();
        let mut rejected = Vec::new();

        if let Some(input) = supplied(changes.amount.as_deref()) {
            match Money::parse(input) {
                Ok(amount) => expense.amount = amount,
                Err(e) => {
                    warn!(id = %id, input, "invalid amount, skipping");
                    rejected.push(FieldRejection {
                        field: "amount",
                        input: input.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if let Some(category) = new_category {
            expense.category = category;
        }

        // Blank notes are not applied; others are stored as typed
        if let Some(note) = changes.note.filter(|n| !n.trim().is_empty()) {
            expense.note = note;
        }

        let after = expense.clone();
        self.save_all(&expenses)?;

        let summary = describe_changes(&before, &after);
        let changed = summary.is_some();
        if changed {
            info!(id = %id, "updated expense");
            self.record(AuditEntry::update(self.clock.now_utc(), &before, &after, summary));
        }

        Ok(UpdateOutcome {
            expense: after,
            changed,
            rejected,
        })
    }

    /// Remove an expense by id
    ///
    /// Returns `false` (and writes nothing) when no expense has that id.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut expenses = self.load_all()?;
        let Some(position) = expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };

        let removed = expenses.remove(position);
        self.save_all(&expenses)?;

        info!(id = %id, "deleted expense");
        self.record(AuditEntry::delete(self.clock.now_utc(), &removed));

        Ok(true)
    }

    /// Remove every expense
    ///
    /// Returns how many expenses were removed. This cannot be undone.
    pub fn clear_all(&self) -> ExpenseResult<usize> {
        let removed = self.load_all()?.len();
        self.save_all(&[])?;

        info!(removed, "cleared all expenses");
        self.record(AuditEntry::clear(self.clock.now_utc(), removed));

        Ok(removed)
    }

    /// All expenses, newest first
    pub fn list_sorted_by_date_descending(&self) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = self.load_all()?;
        sort_by_date_descending(&mut expenses);
        Ok(expenses)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.load_all()?.len())
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

/// Find an expense by id
pub fn find_by_id(expenses: &[Expense], id: ExpenseId) -> Option<&Expense> {
    expenses.iter().find(|e| e.id == id)
}

/// Sort newest first; expenses with equal dates keep their stored order
pub fn sort_by_date_descending(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// First id at or above `candidate` that no stored expense uses
fn unique_id(expenses: &[Expense], candidate: ExpenseId) -> ExpenseId {
    let mut id = candidate;
    while find_by_id(expenses, id).is_some() {
        id = id.next();
    }
    id
}

fn supplied(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}
