//! # Grader Library
//!
//! This module provides the core logic for evaluating a student submission of
//! the Student Performance Classifier project. It supports checking that the
//! required artifacts exist, parsing the classification report, scoring the
//! extracted metrics against the fixed rubric, and generating a result with
//! feedback.
//!
//! ## Key Concepts
//! - **GradingJob**: The main struct representing an evaluation run for a single submission.
//! - **Parsers**: Report parsers behind the `ReportParser` trait seam.
//! - **Scorer**: Fixed thresholds and the all-or-nothing-per-criterion rubric.
//! - **Evaluation**: Immutable result with pass flag, points, and ordered feedback.

pub mod error;
pub mod parsers;
pub mod report;
pub mod scorer;
pub mod submission;
pub mod traits;

use crate::error::GraderError;
use crate::parsers::performance_parser::ClassificationReportParser;
use crate::report::Evaluation;
use crate::traits::report_parser::ReportParser;

use log::{info, warn};
use std::path::PathBuf;

/// Represents an evaluation run for a single student submission.
///
/// # Fields
/// - `submission_dir`: Directory holding the submitted artifacts.
/// - `required_files`: Artifact names that must be present before any parsing happens.
pub struct GradingJob {
    submission_dir: PathBuf,
    required_files: Vec<String>,
}

impl GradingJob {
    /// Create a new evaluation run for the given submission directory, with
    /// the default required artifacts.
    pub fn new(submission_dir: impl Into<PathBuf>) -> Self {
        Self {
            submission_dir: submission_dir.into(),
            required_files: submission::REQUIRED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Override the set of required artifact names.
    pub fn with_required_files(mut self, required_files: Vec<String>) -> Self {
        self.required_files = required_files;
        self
    }

    /// Run the evaluation and produce a result.
    ///
    /// # Steps
    /// 1. Verifies the submission directory exists.
    /// 2. Verifies every required artifact is present, listing each missing one.
    /// 3. Reads and parses the performance report.
    /// 4. Scores accuracy and average F1 against the rubric.
    ///
    /// Every failure path returns a fully-formed zero-point [`Evaluation`]
    /// with descriptive feedback; no error escapes to the caller.
    pub fn evaluate(self) -> Evaluation {
        let mut feedback: Vec<String> = Vec::new();

        if let Err(err) = submission::check_submission_dir(&self.submission_dir) {
            warn!("{}", err.message());
            feedback.push("Submission directory missing".to_string());
            return Evaluation::failure(feedback);
        }

        let missing =
            submission::missing_required_files(&self.submission_dir, &self.required_files);
        if !missing.is_empty() {
            for name in missing {
                warn!("Missing required file: {}", name);
                feedback.push(format!("Missing required file: {}", name));
            }
            return Evaluation::failure(feedback);
        }

        let report_text = match submission::read_report(&self.submission_dir) {
            Ok(text) => text,
            Err(err) => {
                warn!("{}", err.message());
                feedback.push(format!(
                    "Error reading {}: {}",
                    submission::REPORT_FILE,
                    err.message()
                ));
                return Evaluation::failure(feedback);
            }
        };

        let metrics = match ClassificationReportParser.parse(&report_text) {
            Ok(metrics) => metrics,
            Err(err) => {
                warn!("{}", err.message());
                feedback.push(format!(
                    "Error parsing {}: {}",
                    submission::REPORT_FILE,
                    err.message()
                ));
                return Evaluation::failure(feedback);
            }
        };

        let accuracy = match metrics.accuracy {
            Some(value) => value,
            None => {
                let err = GraderError::MissingMetric(format!(
                    "Could not parse accuracy from {}",
                    submission::REPORT_FILE
                ));
                warn!("{}", err.message());
                feedback.push(err.message().to_string());
                return Evaluation::failure(feedback);
            }
        };
        let f1 = metrics.f1_average();

        feedback.push(format!("Accuracy: {:.3}", accuracy));
        feedback.push(format!("F1 Score: {:.3}", f1));

        let outcome = scorer::score_metrics(accuracy, f1);
        feedback.push(outcome.summary.to_string());

        info!(
            "Evaluation complete: accuracy={:.4} f1={:.4} points={} passed={}",
            accuracy, f1, outcome.points, outcome.passed
        );

        Evaluation::new(outcome.passed, outcome.points, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const PASSING_REPORT: &str = "\
              precision    recall  f1-score   support

           0       0.91      0.89      0.90       120
           1       0.84      0.87      0.85       100

    accuracy                           0.88       220
   macro avg       0.87      0.88      0.88       220
weighted avg       0.88      0.88      0.88       220
";

    fn write_submission(dir: &Path, report: &str) {
        fs::write(dir.join(submission::REPORT_FILE), report).expect("write report");
        fs::write(dir.join(submission::CONFUSION_MATRIX_FILE), "png").expect("write png");
        fs::write(dir.join(submission::ROC_CURVE_FILE), "png").expect("write png");
    }

    #[test]
    fn test_evaluate_happy_path() {
        let dir = TempDir::new().expect("create temp dir");
        write_submission(dir.path(), PASSING_REPORT);

        let evaluation = GradingJob::new(dir.path()).evaluate();
        assert!(evaluation.passed);
        assert_eq!(evaluation.points, 150);
        assert_eq!(
            evaluation.feedback,
            vec![
                "Accuracy: 0.880".to_string(),
                "F1 Score: 0.875".to_string(),
                "All criteria met! Excellent work.".to_string(),
            ]
        );
        assert_eq!(evaluation.exit_code(), 0);
    }

    #[test]
    fn test_evaluate_missing_directory() {
        let dir = TempDir::new().expect("create temp dir");
        let job = GradingJob::new(dir.path().join("does_not_exist"));

        let evaluation = job.evaluate();
        assert!(!evaluation.passed);
        assert_eq!(evaluation.points, 0);
        assert_eq!(
            evaluation.render(),
            "Passed: False\n\
             Points: 0\n\
             Feedback:\n\
             - Submission directory missing\n"
        );
        assert_eq!(evaluation.exit_code(), 1);
    }

    #[test]
    fn test_evaluate_lists_each_missing_file() {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join(submission::CONFUSION_MATRIX_FILE), "png")
            .expect("write png");

        let evaluation = GradingJob::new(dir.path()).evaluate();
        assert!(!evaluation.passed);
        assert_eq!(evaluation.points, 0);
        assert_eq!(
            evaluation.feedback,
            vec![
                format!("Missing required file: {}", submission::REPORT_FILE),
                format!("Missing required file: {}", submission::ROC_CURVE_FILE),
            ]
        );
    }

    #[test]
    fn test_evaluate_unreadable_report() {
        let dir = TempDir::new().expect("create temp dir");
        // A directory in place of the report satisfies the existence check for
        // the other artifacts but fails the read.
        fs::create_dir(dir.path().join(submission::REPORT_FILE)).expect("create dir");
        fs::write(dir.path().join(submission::CONFUSION_MATRIX_FILE), "png").expect("write png");
        fs::write(dir.path().join(submission::ROC_CURVE_FILE), "png").expect("write png");

        let evaluation = GradingJob::new(dir.path())
            .with_required_files(vec![
                submission::CONFUSION_MATRIX_FILE.to_string(),
                submission::ROC_CURVE_FILE.to_string(),
            ])
            .evaluate();
        assert!(!evaluation.passed);
        assert_eq!(evaluation.points, 0);
        assert_eq!(evaluation.feedback.len(), 1);
        assert!(
            evaluation.feedback[0]
                .starts_with(&format!("Error reading {}", submission::REPORT_FILE)),
            "got: {}",
            evaluation.feedback[0]
        );
    }

    #[test]
    fn test_evaluate_unparsable_accuracy() {
        let dir = TempDir::new().expect("create temp dir");
        write_submission(dir.path(), "Training complete.\nBest model saved.\n");

        let evaluation = GradingJob::new(dir.path()).evaluate();
        assert!(!evaluation.passed);
        assert_eq!(evaluation.points, 0);
        assert_eq!(
            evaluation.feedback,
            vec![format!(
                "Could not parse accuracy from {}",
                submission::REPORT_FILE
            )]
        );
    }

    #[test]
    fn test_evaluate_accuracy_below_threshold() {
        let dir = TempDir::new().expect("create temp dir");
        let report = "\
           0       0.80      0.80      0.80       100
           1       0.80      0.80      0.80       100

    accuracy                           0.849       200
";
        write_submission(dir.path(), report);

        let evaluation = GradingJob::new(dir.path()).evaluate();
        assert!(!evaluation.passed);
        assert_eq!(evaluation.points, 75);
        assert_eq!(
            evaluation.feedback,
            vec![
                "Accuracy: 0.849".to_string(),
                "F1 Score: 0.800".to_string(),
                "F1 score requirement met, but accuracy needs improvement.".to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_zero_class_rows_defaults_f1() {
        let dir = TempDir::new().expect("create temp dir");
        write_submission(dir.path(), "    accuracy                           0.91       180\n");

        let evaluation = GradingJob::new(dir.path()).evaluate();
        assert!(!evaluation.passed);
        assert_eq!(evaluation.points, 100);
        assert_eq!(
            evaluation.feedback,
            vec![
                "Accuracy: 0.910".to_string(),
                "F1 Score: 0.000".to_string(),
                "Accuracy requirement met, but F1 score needs improvement.".to_string(),
            ]
        );
    }
}
