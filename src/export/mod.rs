//! Export module for the expense tracker
//!
//! Provides CSV export of the expense collection.

pub mod csv;

pub use self::csv::{expense_rows, export_file_name, write_expenses_csv, CSV_HEADER};
