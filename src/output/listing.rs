//! Plain path listing for listing mode.
//!
//! In listing mode every in-scope path is emitted as one line of text, in
//! traversal order, to the configured output stream. The traversal visits
//! each path once, so no deduplication is needed here.

use std::io::{self, Write};
use std::path::Path;

/// Write one path as a line of text to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if the write fails.
pub fn write_path<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_write_path_single_line() {
        let mut buffer = Vec::new();
        write_path(&PathBuf::from("test/data/dir.log"), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "test/data/dir.log\n");
    }

    #[test]
    fn test_write_path_preserves_order() {
        let mut buffer = Vec::new();
        for p in ["a.log", "dir2/b.sh", "c.log"] {
            write_path(&PathBuf::from(p), &mut buffer).unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "a.log\ndir2/b.sh\nc.log\n"
        );
    }
}
