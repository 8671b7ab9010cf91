//!
//! Traits Module
//!
//! This module contains core traits used throughout the grader for extensibility and abstraction.
//!
//! - [`report_parser`]: Defines the generic trait for parsing report text into Rust types.
//!
//! Implement these traits to extend the grader with new report formats.

pub mod report_parser;
