//! Storage layer for the expense tracker
//!
//! The whole expense collection is read and replaced as a unit. Backends
//! implement `ExpenseBackend`: `JsonFileBackend` persists to `data.json`
//! with atomic writes, `MemoryBackend` keeps everything in process.
//!
//! There is no cross-process locking. Two invocations mutating the same
//! file concurrently race, and the last write wins.

pub mod expenses;
mod file_io;
pub mod memory;

pub use expenses::JsonFileBackend;
pub use memory::MemoryBackend;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Load/replace contract with persistent storage
pub trait ExpenseBackend {
    /// Read the full persisted collection, in stored order
    ///
    /// Missing or unparsable state is an empty collection.
    fn load(&self) -> ExpenseResult<Vec<Expense>>;

    /// Replace the persisted collection with `expenses`
    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()>;
}

impl<B: ExpenseBackend + ?Sized> ExpenseBackend for Box<B> {
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        (**self).load()
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        (**self).save(expenses)
    }
}
