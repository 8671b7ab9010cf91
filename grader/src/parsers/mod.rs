//! # Parsers
//!
//! This module is responsible for parsing the report files a submission may
//! contain. Each sub-module is dedicated to one report format.
//!
//! The parsers implemented in this module adhere to the `ReportParser` trait,
//! ensuring a consistent interface across report formats.
//!
//! The available parsers are:
//! - [`performance_parser`]: For parsing sklearn-style classification reports.

pub mod performance_parser;
