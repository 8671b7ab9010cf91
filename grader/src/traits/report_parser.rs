//! Report Parser Trait
//!
//! This module defines the [`ReportParser`] trait, which provides a generic interface for parsing raw report text into strongly-typed Rust structures.
//! Implementations of this trait are responsible for scanning the input text and converting it into the appropriate domain model, returning detailed errors on failure.
//!
//! # Usage
//!
//! Implement this trait for any parser that converts report text into a specific report type.
//!
//! # Example
//!
//! ```rust
//! use grader::error::GraderError;
//! use grader::traits::report_parser::ReportParser;
//!
//! struct MyReportParser;
//! struct MyReport;
//!
//! impl ReportParser<MyReport> for MyReportParser {
//!     fn parse(&self, raw: &str) -> Result<MyReport, GraderError> {
//!         Ok(MyReport)
//!     }
//! }
//! ```

use crate::error::GraderError;

/// A trait for parsing raw report text into a strongly-typed Rust structure.
///
/// Implementors should scan the input and return a domain-specific type or a [`GraderError`] on failure.
///
/// # Type Parameters
///
/// * `T` - The output type produced by the parser.
pub trait ReportParser<T> {
    /// Parse report text into the target type.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw report text to parse.
    ///
    /// # Errors
    ///
    /// Returns a [`GraderError`] if the input does not conform to the expected format.
    fn parse(&self, raw: &str) -> Result<T, GraderError>;
}
