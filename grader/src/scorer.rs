//! # Scorer Module
//!
//! This module maps extracted metrics to a point total via the fixed grading
//! rubric. Both thresholds are inclusive; the rubric awards points per
//! criterion, all-or-nothing.

/// Minimum accuracy required to pass the accuracy criterion.
pub const ACCURACY_THRESHOLD: f64 = 0.85;
/// Minimum average F1 score required to pass the F1 criterion.
pub const F1_THRESHOLD: f64 = 0.80;

/// Maximum points awardable by the rubric.
pub const MAX_POINTS: u32 = 150;

/// Outcome of applying the rubric to a pair of metrics.
#[derive(Debug, PartialEq, Eq)]
pub struct RubricOutcome {
    /// True only when both criteria pass.
    pub passed: bool,
    /// Points awarded, one of 150, 100, 75, 50.
    pub points: u32,
    /// Rubric feedback line for this outcome.
    pub summary: &'static str,
}

/// Applies the fixed thresholds to the extracted metrics.
///
/// # Arguments
///
/// * `accuracy` - Overall accuracy in [0,1].
/// * `f1` - Average F1 score in [0,1].
///
/// # Behavior
///
/// Thresholds are inclusive: accuracy of exactly 0.85 and F1 of exactly 0.80
/// both pass. Points follow the rubric: both criteria 150, accuracy only 100,
/// F1 only 75, neither 50.
pub fn score_metrics(accuracy: f64, f1: f64) -> RubricOutcome {
    let acc_pass = accuracy >= ACCURACY_THRESHOLD;
    let f1_pass = f1 >= F1_THRESHOLD;

    let (points, summary) = match (acc_pass, f1_pass) {
        (true, true) => (MAX_POINTS, "All criteria met! Excellent work."),
        (true, false) => (
            100,
            "Accuracy requirement met, but F1 score needs improvement.",
        ),
        (false, true) => (
            75,
            "F1 score requirement met, but accuracy needs improvement.",
        ),
        (false, false) => (
            50,
            "Neither accuracy nor F1 score meets requirements. Review your model.",
        ),
    };

    RubricOutcome {
        passed: acc_pass && f1_pass,
        points,
        summary,
    }
}
