//! Filter rules deciding which directory entries are in scope.
//!
//! # Overview
//!
//! Every visited entry passes through [`FilterRules::is_excluded`], which
//! applies the rules in a fixed order with short-circuiting:
//!
//! 1. Directories are always excluded.
//! 2. Files smaller than the minimum size are excluded.
//! 3. With an extension rule set, files whose extension is not an exact,
//!    case-sensitive match (including the dot) are excluded.
//! 4. With an exclude pattern set, the pattern is glob-matched against the
//!    cleaned path and against the base name with its extension appended;
//!    a hit on either candidate excludes the file.
//!
//! Matching the pattern against two candidate strings makes patterns like
//! `*.sh` work at any depth even though a wildcard never crosses a path
//! separator. A malformed pattern is logged and treated as no match.
//!
//! # Example
//!
//! ```
//! use dupewalk::scanner::{FileRecord, FilterRules};
//! use std::path::PathBuf;
//!
//! let rules = FilterRules {
//!     extension: Some(".log".to_string()),
//!     min_size: 10,
//!     ..Default::default()
//! };
//!
//! let record = FileRecord::new(PathBuf::from("test/data/dir.log"), false, 64);
//! assert!(!rules.is_excluded(&record));
//!
//! let record = FileRecord::new(PathBuf::from("test/data/script.sh"), false, 64);
//! assert!(rules.is_excluded(&record));
//! ```

use glob::{MatchOptions, Pattern};
use std::path::Path;

use super::path_utils::{base_name, clean_path, extension_of};
use super::FileRecord;

/// Wildcards stay within one path component, mirroring shell globbing of a
/// single name; dotfiles are not special-cased.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Immutable per-run filter policy.
///
/// `None` (or an empty string) disables the extension and exclude rules;
/// `min_size: 0` keeps files of every size, including empty ones.
#[derive(Debug, Clone, Default)]
pub struct FilterRules {
    /// Exact extension to keep, including the leading dot (e.g. ".log").
    pub extension: Option<String>,
    /// Glob pattern excluding matching files (`*`, `?`, character classes).
    pub exclude: Option<String>,
    /// Minimum file size in bytes. Smaller files are excluded.
    pub min_size: u64,
}

impl FilterRules {
    /// Decide whether an entry is excluded from processing.
    ///
    /// Pure function of the record and the rules, except for a logged
    /// warning when the exclude pattern is malformed.
    #[must_use]
    pub fn is_excluded(&self, record: &FileRecord) -> bool {
        if record.is_dir || record.size < self.min_size {
            return true;
        }

        if let Some(ext) = non_empty(self.extension.as_deref()) {
            if extension_of(&record.path) != ext {
                return true;
            }
        }

        if let Some(pattern) = non_empty(self.exclude.as_deref()) {
            return self.matches_exclude(pattern, &record.path);
        }

        false
    }

    /// Check the exclude pattern for well-formedness.
    ///
    /// The filter itself treats a malformed pattern as "no match"; the
    /// driver uses this to surface the problem in its exit status.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`glob::PatternError`] for a malformed
    /// pattern.
    pub fn validate(&self) -> Result<(), glob::PatternError> {
        if let Some(pattern) = non_empty(self.exclude.as_deref()) {
            Pattern::new(pattern)?;
        }
        Ok(())
    }

    /// Match the exclude pattern against both candidate strings.
    fn matches_exclude(&self, pattern: &str, path: &Path) -> bool {
        let compiled = match Pattern::new(pattern) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("invalid exclude pattern '{}': {}", pattern, e);
                return false;
            }
        };

        let cleaned = clean_path(path);
        if compiled.matches_with(&cleaned.to_string_lossy(), GLOB_OPTIONS) {
            return true;
        }

        // Second candidate: base name with the extension appended again,
        // so name-shaped patterns hit files at any depth.
        let base_with_ext = format!("{}{}", base_name(path), extension_of(path));
        compiled.matches_with(&base_with_ext, GLOB_OPTIONS)
    }
}

/// Treat an empty string the same as an absent rule.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
