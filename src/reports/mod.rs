//! Reports for the expense tracker
//!
//! Pure computations over expense slices; nothing here touches storage.

pub mod summary;

pub use summary::{filter_by_period, summarize, top_category, CategorySummary, MonthlySummary};
