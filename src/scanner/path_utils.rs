//! Lexical path helpers for filter rules.
//!
//! The filter matches exclude patterns against string forms of a path, so
//! these helpers work purely on the path text and never touch the
//! filesystem. All of them are deterministic and allocation-light.

use std::path::{Component, Path, PathBuf};

/// Clean a path lexically: collapse redundant separators, drop interior
/// `.` components, and resolve `..` against preceding components where
/// possible.
///
/// An empty result becomes `.` so that a cleaned path is never the empty
/// string.
///
/// # Example
///
/// ```
/// use dupewalk::scanner::path_utils::clean_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean_path(Path::new("test//data/./dir.log")), PathBuf::from("test/data/dir.log"));
/// assert_eq!(clean_path(Path::new("a/b/../c")), PathBuf::from("a/c"));
/// assert_eq!(clean_path(Path::new("")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    let mut depth = 0usize; // components that `..` may pop

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                cleaned.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    cleaned.pop();
                    depth -= 1;
                } else if !cleaned.has_root() {
                    cleaned.push("..");
                }
                // `..` at the root stays at the root
            }
            Component::Normal(part) => {
                cleaned.push(part);
                depth += 1;
            }
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// The extension of the path's final element, including the leading dot.
///
/// Returns the suffix beginning at the final dot of the file name, or an
/// empty string when there is no dot. The comparison the filter performs
/// is case-sensitive, so no case folding happens here.
///
/// # Example
///
/// ```
/// use dupewalk::scanner::path_utils::extension_of;
/// use std::path::Path;
///
/// assert_eq!(extension_of(Path::new("test/data/dir.log")), ".log");
/// assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
/// assert_eq!(extension_of(Path::new("Makefile")), "");
/// assert_eq!(extension_of(Path::new(".bashrc")), ".bashrc");
/// ```
#[must_use]
pub fn extension_of(path: &Path) -> String {
    let name = base_name(path);
    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

/// The final element of the path as a string.
///
/// Falls back to the whole path when there is no final element (e.g. `/`).
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_redundant_separators() {
        assert_eq!(
            clean_path(Path::new("test//data///dir.log")),
            PathBuf::from("test/data/dir.log")
        );
    }

    #[test]
    fn test_clean_path_current_dir() {
        assert_eq!(clean_path(Path::new("./a/./b")), PathBuf::from("a/b"));
        assert_eq!(clean_path(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn test_clean_path_parent_dir() {
        assert_eq!(clean_path(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(clean_path(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(clean_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_clean_path_already_clean() {
        assert_eq!(
            clean_path(Path::new("test/data/dir.log")),
            PathBuf::from("test/data/dir.log")
        );
        assert_eq!(clean_path(Path::new("/abs/path")), PathBuf::from("/abs/path"));
    }

    #[test]
    fn test_extension_includes_dot() {
        assert_eq!(extension_of(Path::new("test/data/dir.log")), ".log");
        assert_eq!(extension_of(Path::new("script.sh")), ".sh");
    }

    #[test]
    fn test_extension_last_dot_wins() {
        assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
    }

    #[test]
    fn test_extension_none() {
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new("dir/README")), "");
    }

    #[test]
    fn test_extension_dotfile() {
        // A leading dot counts as the final dot of the name
        assert_eq!(extension_of(Path::new(".bashrc")), ".bashrc");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("test/data/dir.log")), "dir.log");
        assert_eq!(base_name(Path::new("plain")), "plain");
    }
}
