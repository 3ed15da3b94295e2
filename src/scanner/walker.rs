//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct, the traversal driver that
//! feeds the filter and the duplicate detector. It visits one entry at a
//! time, depth-first, with children sorted by file name so that output
//! order is deterministic across runs.
//!
//! The walker yields every entry it can describe, directories included;
//! deciding what is in scope belongs to [`FilterRules`]. Failures are
//! yielded as [`ScanError`] values rather than handled here, so the
//! top-level driver alone decides what aborts the run.
//!
//! [`FilterRules`]: super::FilterRules
//!
//! # Example
//!
//! ```no_run
//! use dupewalk::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(record) => println!("{}: {} bytes", record.path.display(), record.size),
//!         Err(e) => eprintln!("Warning: {}", e),
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileRecord, ScanError};

/// Single-threaded directory walker with deterministic ordering.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the directory tree, yielding one [`FileRecord`] per entry.
    ///
    /// Entries appear in depth-first order with siblings sorted by file
    /// name; the root directory itself is the first entry. Metadata is
    /// obtained per entry with a stat-equivalent call that follows
    /// symlinks, so a symlinked directory is reported as a directory.
    ///
    /// Two kinds of failure are yielded instead of records:
    /// [`ScanError::Stat`] when one entry's metadata cannot be read, and
    /// [`ScanError::Walk`] when the traversal itself fails.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileRecord, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .map(move |entry_result| match entry_result {
                Ok(entry) => {
                    let path = entry.into_path();
                    match std::fs::metadata(&path) {
                        Ok(metadata) => Ok(FileRecord::new(
                            path,
                            metadata.is_dir(),
                            metadata.len(),
                        )),
                        Err(source) => Err(ScanError::Stat { path, source }),
                    }
                }
                Err(e) => Err(self.walk_error(e)),
            })
    }

    /// Convert a walkdir error into a [`ScanError::Walk`].
    fn walk_error(&self, err: walkdir::Error) -> ScanError {
        let path = err
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let source = err.into_io_error().unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
        });
        ScanError::Walk { path, source }
    }
}
