//! # Evaluation Report Module
//!
//! This module defines the result type produced by an evaluation run and its
//! rendering for the command line.
//!
//! ## Overview
//!
//! [`Evaluation`] carries the pass flag, awarded points, and feedback lines in
//! generation order. It is immutable after computation: the pipeline builds it
//! once and the binary only renders it.
//!
//! ## Stdout contract
//!
//! [`Evaluation::render`] produces exactly:
//!
//! ```text
//! Passed: True
//! Points: 150
//! Feedback:
//! - Accuracy: 0.880
//! ```
//!
//! with one `- ` line per feedback entry. Booleans render capitalized
//! (`True`/`False`) because downstream harnesses parse these lines verbatim.
//!
//! ## Design Notes
//!
//! - [`Evaluation`] is also serializable, so callers other than the CLI can
//!   consume the result as JSON.

use chrono::Utc;
use serde::Serialize;

/// The result of evaluating one submission.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    /// True only when every grading criterion passed.
    pub passed: bool,
    /// Points awarded by the rubric, 0 on any fatal failure.
    pub points: u32,
    /// Feedback lines in generation order.
    pub feedback: Vec<String>,
    /// RFC3339 timestamp of when the evaluation was computed.
    pub generated_at: String,
}

impl Evaluation {
    /// Builds a completed evaluation.
    pub fn new(passed: bool, points: u32, feedback: Vec<String>) -> Self {
        Evaluation {
            passed,
            points,
            feedback,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Builds a zero-point failure carrying the given feedback.
    pub fn failure(feedback: Vec<String>) -> Self {
        Evaluation::new(false, 0, feedback)
    }

    /// Renders the stdout report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Passed: {}\n",
            if self.passed { "True" } else { "False" }
        ));
        out.push_str(&format!("Points: {}\n", self.points));
        out.push_str("Feedback:\n");
        for message in &self.feedback {
            out.push_str(&format!("- {}\n", message));
        }
        out
    }

    /// Process exit code: 0 if passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed { 0 } else { 1 }
    }
}
