//! Bounded-prefix content fingerprinting.
//!
//! # Overview
//!
//! Files are fingerprinted by hashing at most their first
//! [`FINGERPRINT_PREFIX_LEN`] bytes with SHA-256. Two files whose leading
//! bytes are identical therefore get the same fingerprint regardless of
//! any difference beyond that offset. This trades a known accuracy band
//! for never reading more than a few KiB per file.
//!
//! # Example
//!
//! ```no_run
//! use dupewalk::scanner::{fingerprint_file, fingerprint_to_hex};
//! use std::path::Path;
//!
//! let fp = fingerprint_file(Path::new("some/file.log"))?;
//! println!("{}", fingerprint_to_hex(&fp));
//! # Ok::<(), dupewalk::scanner::hasher::FingerprintError>(())
//! ```

use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Maximum number of leading bytes hashed per file.
pub const FINGERPRINT_PREFIX_LEN: usize = 5120;

/// A SHA-256 digest of a file's leading bytes.
///
/// Fixed-size value; equality is plain byte-sequence equality.
pub type Fingerprint = [u8; 32];

/// Compute the fingerprint of the file at `path`.
///
/// Opens the file read-only, reads up to [`FINGERPRINT_PREFIX_LEN`] bytes,
/// and digests exactly the bytes read. Reaching end-of-file before the
/// prefix is full is not an error; files shorter than the prefix are
/// digested whole. The handle is released before returning, on every
/// exit path.
///
/// # Errors
///
/// Returns a [`FingerprintError`] when the file cannot be opened or read.
/// Callers in duplicate-detection mode treat this as fatal, since no
/// duplicate decision can be made without the content.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint, FingerprintError> {
    let file = File::open(path).map_err(|e| FingerprintError::from_io(path, e))?;

    let mut prefix = Vec::with_capacity(FINGERPRINT_PREFIX_LEN);
    file.take(FINGERPRINT_PREFIX_LEN as u64)
        .read_to_end(&mut prefix)
        .map_err(|e| FingerprintError::from_io(path, e))?;

    Ok(Sha256::digest(&prefix).into())
}

/// Render a fingerprint as a lowercase hex string (64 characters).
#[must_use]
pub fn fingerprint_to_hex(fingerprint: &Fingerprint) -> String {
    let mut hex = String::with_capacity(64);
    for byte in fingerprint {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

/// Errors that can occur during fingerprinting.
#[derive(thiserror::Error, Debug)]
pub enum FingerprintError {
    /// The specified file was not found.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FingerprintError {
    fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap().write_all(content).unwrap();
        path
    }

    #[test]
    fn test_fingerprint_matches_direct_digest() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "a.txt", b"hello fingerprint");

        let fp = fingerprint_file(&path).unwrap();
        let expected: Fingerprint = Sha256::digest(b"hello fingerprint").into();

        assert_eq!(fp, expected);
    }

    #[test]
    fn test_short_file_digests_only_bytes_read() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "short.txt", b"tiny");

        let fp = fingerprint_file(&path).unwrap();

        // No padding to the prefix length
        let padded: Fingerprint = Sha256::digest(&[b"tiny".as_slice(), &[0u8; 5116]].concat()).into();
        assert_ne!(fp, padded);
        let expected: Fingerprint = Sha256::digest(b"tiny").into();
        assert_eq!(fp, expected);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "empty", b"");

        let fp = fingerprint_file(&path).unwrap();
        let expected: Fingerprint = Sha256::digest(b"").into();
        assert_eq!(fp, expected);
    }

    #[test]
    fn test_only_prefix_is_hashed() {
        let dir = tempdir().unwrap();
        let prefix = vec![b'x'; FINGERPRINT_PREFIX_LEN];

        let mut a = prefix.clone();
        a.extend_from_slice(b"tail one");
        let mut b = prefix.clone();
        b.extend_from_slice(b"completely different tail");

        let path_a = write_file(dir.path(), "a.bin", &a);
        let path_b = write_file(dir.path(), "b.bin", &b);

        assert_eq!(
            fingerprint_file(&path_a).unwrap(),
            fingerprint_file(&path_b).unwrap()
        );
    }

    #[test]
    fn test_difference_inside_prefix_changes_fingerprint() {
        let dir = tempdir().unwrap();
        let path_a = write_file(dir.path(), "a.bin", b"same same A");
        let path_b = write_file(dir.path(), "b.bin", b"same same B");

        assert_ne!(
            fingerprint_file(&path_a).unwrap(),
            fingerprint_file(&path_b).unwrap()
        );
    }

    #[test]
    fn test_missing_file_error() {
        let dir = tempdir().unwrap();
        let err = fingerprint_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, FingerprintError::NotFound(_)));
    }

    #[test]
    fn test_fingerprint_to_hex() {
        let hex = fingerprint_to_hex(&[0xab; 32]);
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(hex.starts_with("abab"));
    }
}
