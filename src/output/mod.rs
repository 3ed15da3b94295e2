//! Output formatters for scan results.
//!
//! This module provides the two result surfaces:
//! - [`json`]: the aggregated JSON report of duplicate pairs
//! - [`listing`]: plain newline-separated paths for listing mode

pub mod json;
pub mod listing;

// Re-export main types
pub use json::DupReport;

/// Errors that can occur while producing result output.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing the result
    #[error("I/O error while writing results: {0}")]
    Io(#[from] std::io::Error),
}
