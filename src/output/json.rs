//! JSON report of detected duplicate pairs.
//!
//! Provides machine-readable output for scripting and automation.
//!
//! # Output Schema
//!
//! A JSON array of pairs in detection order, empty when no duplicates
//! were found:
//!
//! ```json
//! [
//!   {"Original": "test/data/dir.log", "Duplicate": "test/data/dir_duplicate.log"}
//! ]
//! ```
//!
//! # Example
//!
//! ```
//! use dupewalk::duplicates::DuplicateRecord;
//! use dupewalk::output::DupReport;
//!
//! let mut report = DupReport::new();
//! report.push(DuplicateRecord {
//!     original: "a.log".to_string(),
//!     duplicate: "b.log".to_string(),
//! });
//! println!("{}", report.to_json().unwrap());
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::duplicates::DuplicateRecord;

use super::OutputError;

/// Accumulates duplicate records in encounter order.
#[derive(Debug, Default)]
pub struct DupReport {
    records: Vec<DuplicateRecord>,
}

impl DupReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records keep their insertion order.
    pub fn push(&mut self, record: DuplicateRecord) {
        self.records.push(record);
    }

    /// The accumulated records, in detection order.
    #[must_use]
    pub fn records(&self) -> &[DuplicateRecord] {
        &self.records
    }

    /// Number of accumulated records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no duplicate was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the record sequence as a compact JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    /// Write the JSON array to a writer, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        let json = self.to_json()?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write the JSON array to the configured destination.
    ///
    /// With `Some(path)` the file is created (or truncated) and written;
    /// with `None` the report goes to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error when the destination cannot be opened or written,
    /// or when serialization fails. Single attempt, no retry.
    pub fn write_to_destination(&self, destination: Option<&Path>) -> Result<(), OutputError> {
        match destination {
            Some(path) => {
                let mut file = File::create(path)?;
                self.write_to(&mut file)
            }
            None => self.write_to(&mut std::io::stdout().lock()),
        }
    }
}
