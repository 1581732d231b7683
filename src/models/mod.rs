//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its identifier and amount, the category catalog and the
//! summary period.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::Category;
pub use expense::{Expense, DATE_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use period::Period;
