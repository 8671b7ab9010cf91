//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which encapsulates all error types that can occur while checking a submission directory and parsing its performance report.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! # Usage
//!
//! Use [`GraderError`] as the error type in functions that may fail due to input, parsing, or I/O issues. The evaluation pipeline converts every variant into feedback text; none escape to the caller.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//!
//! fn parse_report(text: &str) -> Result<(), GraderError> {
//!     if text.is_empty() {
//!         return Err(GraderError::ParseReportError("empty report".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

/// Represents all error types that can occur in the grader.
#[derive(Debug)]
pub enum GraderError {
    /// The submission directory does not exist or is not a directory.
    MissingDirectory(String),
    /// A required artifact is missing from the submission.
    MissingFile(String),
    /// I/O error (file not found, unreadable, etc.).
    IoError(String),
    /// Error parsing the performance report (format or content error).
    ParseReportError(String),
    /// A required metric could not be extracted from the report.
    MissingMetric(String),
}

impl GraderError {
    /// The human-readable message carried by the variant.
    pub fn message(&self) -> &str {
        match self {
            GraderError::MissingDirectory(msg)
            | GraderError::MissingFile(msg)
            | GraderError::IoError(msg)
            | GraderError::ParseReportError(msg)
            | GraderError::MissingMetric(msg) => msg,
        }
    }
}
