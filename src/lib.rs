//! Expense Tracker - Personal expense tracking from the terminal
//!
//! This library provides the core functionality for the `expense` CLI: a
//! persisted collection of expenses, monthly summaries by category, and CSV
//! export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, periods)
//! - `clock`: Time source for ids and dates
//! - `storage`: Persistence backends (JSON file, in-memory)
//! - `services`: Record store operations
//! - `reports`: Monthly aggregation
//! - `audit`: Audit logging of mutations
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::JsonFileBackend;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let service = ExpenseService::new(JsonFileBackend::new(paths.data_file()));
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
