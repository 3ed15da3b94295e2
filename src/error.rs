//! Process exit codes.

/// Exit codes for the dupewalk application.
///
/// - 0: Success (run completed, with or without duplicates)
/// - 1: General error (fatal I/O failure during traversal, hashing, or output)
/// - 3: Partial success (run completed but some paths could not be processed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: the full traversal completed.
    Success = 0,
    /// General error: an unrecoverable error aborted the run.
    GeneralError = 1,
    /// Partial success: the traversal completed but encountered some
    /// non-fatal errors (unreadable metadata, malformed exclude pattern).
    PartialSuccess = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
