//! Audit logging for the expense tracker
//!
//! Records every create, update, delete and clear with before/after values
//! in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, expense id and
//!   optional before/after snapshots.
//! - `AuditLogger`: writes entries to the audit log file as JSON lines.
//! - `describe_changes`: human-readable summary of an update.

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
