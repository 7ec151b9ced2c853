//! Audit logging for Study Global
//!
//! Records draft edits, office deletions and application submissions in an
//! append-only JSONL log.
//!
//! - `AuditEntry`: timestamp, operation, entity and optional before/after values
//! - `AuditLogger`: appends entries to `audit.log`, one JSON object per line
//! - `changed_paths`: dotted-path diff used for update summaries

mod diff;
mod entry;
mod logger;

pub use diff::{changed_paths, summarize};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
