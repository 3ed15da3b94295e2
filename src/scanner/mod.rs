//! Scanner module for directory traversal, filtering, and file hashing.
//!
//! This module provides functionality for:
//! - Single-threaded directory walking with deterministic ordering
//! - Filter rules deciding which files are in scope
//! - SHA-256 fingerprinting of a file's leading bytes
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and per-entry metadata collection
//! - [`filter`]: Exclusion rules (directories, size, extension, glob)
//! - [`hasher`]: Bounded-prefix content fingerprinting
//! - [`path_utils`]: Lexical path helpers shared by the filter
//!
//! # Example
//!
//! ```no_run
//! use dupewalk::scanner::{FilterRules, Walker};
//! use std::path::Path;
//!
//! let rules = FilterRules {
//!     min_size: 1024, // Skip files under 1KiB
//!     ..Default::default()
//! };
//!
//! let walker = Walker::new(Path::new("."));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(record) if !rules.is_excluded(&record) => {
//!             println!("{}: {} bytes", record.path.display(), record.size);
//!         }
//!         Ok(_) => {} // filtered out
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

pub mod filter;
pub mod hasher;
pub mod path_utils;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use filter::FilterRules;
pub use hasher::{fingerprint_file, fingerprint_to_hex, Fingerprint, FINGERPRINT_PREFIX_LEN};
pub use walker::Walker;

/// Metadata snapshot for one visited directory entry.
///
/// Produced by the walker from a stat-equivalent call, consumed by the
/// filter, and not retained beyond a single filter decision.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path to the entry, rooted at the walk's starting directory
    pub path: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
    /// Size in bytes
    pub size: u64,
}

impl FileRecord {
    /// Create a new FileRecord.
    #[must_use]
    pub fn new(path: PathBuf, is_dir: bool, size: u64) -> Self {
        Self { path, is_dir, size }
    }
}

/// Errors that can occur during directory scanning.
///
/// The walker surfaces every failure to the caller; the top-level driver
/// alone decides which ones abort the run (see [`ScanError::is_fatal`]).
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Metadata could not be read for one entry. The entry is skipped
    /// and the walk continues.
    #[error("cannot stat {path}: {source}")]
    Stat {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The traversal itself failed (unreadable directory, missing root).
    #[error("cannot walk {path}: {source}")]
    Walk {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Whether this error must abort the run.
    ///
    /// Stat failures are recoverable (skip the entry); traversal failures
    /// are not, since whole subtrees may be silently missing afterwards.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Walk { .. })
    }
}
