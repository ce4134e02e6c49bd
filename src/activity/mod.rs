//! Activity logging for Trakr
//!
//! Records all create, update, delete operations with before/after values
//! in an append-only activity log.
//!
//! # Architecture
//!
//! The activity system consists of three components:
//!
//! - `ActivityEntry`: Represents a single log entry with timestamp, operation,
//!   entity information, and optional before/after values.
//! - `ActivityLogger`: Handles writing entries to the log file using a
//!   line-delimited JSON format (JSONL).
//! - `generate_diff`: Utility function to create human-readable diffs between
//!   entity states.
//!
//! # Example
//!
//! ```rust,ignore
//! use trakr::activity::{ActivityEntry, ActivityLogger, EntityKind};
//!
//! let logger = ActivityLogger::new(activity_log_path);
//!
//! let entry = ActivityEntry::create(
//!     EntityKind::Wallet,
//!     "wal-12345678",
//!     Some("Cash".to_string()),
//!     &wallet,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{ActivityEntry, EntityKind, Operation};
pub use logger::ActivityLogger;
