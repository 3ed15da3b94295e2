//! Duplicate detection module.
//!
//! This module provides the run-scoped fingerprint history and the
//! incremental matching of each new file against it.

pub mod history;

pub use history::{DuplicateRecord, History, HistoryEntry};
