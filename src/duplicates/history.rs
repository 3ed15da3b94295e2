//! Fingerprint history and incremental duplicate matching.
//!
//! # Overview
//!
//! The [`History`] holds one [`HistoryEntry`] per distinct file seen so
//! far in the current run, in insertion order. Each new file is compared
//! against the existing entries oldest-first; the first fingerprint match
//! wins, so the earliest-seen file is always reported as the original.
//! Unmatched files are appended, matched files are not, which keeps the
//! history free of duplicate paths and makes results a pure function of
//! the traversal order.
//!
//! The history is owned by one run and threaded through it by value;
//! there is no sharing and no locking.
//!
//! # Example
//!
//! ```
//! use dupewalk::duplicates::History;
//! use std::path::Path;
//!
//! let mut history = History::new();
//! assert!(history.process_file(Path::new("a.log"), [7u8; 32]).is_none());
//! let dup = history.process_file(Path::new("b.log"), [7u8; 32]).unwrap();
//! assert_eq!(dup.original, "a.log");
//! assert_eq!(dup.duplicate, "b.log");
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::scanner::Fingerprint;

/// One previously seen file: its path and content fingerprint.
///
/// Created the first time a file is processed and never mutated.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Path of the file as it was visited
    pub path: PathBuf,
    /// Fingerprint of the file's leading bytes
    pub fingerprint: Fingerprint,
}

/// A detected duplicate pair.
///
/// `original` is the path of the earlier history entry that matched;
/// `duplicate` is the file just processed. Serialized with capitalized
/// field names, e.g. `{"Original": "a.log", "Duplicate": "b.log"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DuplicateRecord {
    /// Path of the earlier file with the same fingerprint
    pub original: String,
    /// Path of the newly processed file
    pub duplicate: String,
}

/// Ordered history of files seen during one run.
///
/// Exclusively owned by the scan loop; grows monotonically and is never
/// pruned or reordered.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct files recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no file has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Match one file against the history, updating it when there is no hit.
    ///
    /// Scans the entries in insertion order and stops at the first whose
    /// fingerprint equals `fingerprint`; ties between several earlier
    /// files with the same fingerprint therefore always resolve to the
    /// earliest-inserted one. On a hit the history is left unmodified and
    /// the duplicate pair is returned; otherwise the file is appended as
    /// a new entry and `None` is returned.
    pub fn process_file(&mut self, path: &Path, fingerprint: Fingerprint) -> Option<DuplicateRecord> {
        if let Some(hit) = self.entries.iter().find(|e| e.fingerprint == fingerprint) {
            return Some(DuplicateRecord {
                original: hit.path.to_string_lossy().into_owned(),
                duplicate: path.to_string_lossy().into_owned(),
            });
        }

        self.entries.push(HistoryEntry {
            path: path.to_path_buf(),
            fingerprint,
        });
        None
    }
}
