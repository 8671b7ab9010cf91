use crate::error::GraderError;
use crate::traits::report_parser::ReportParser;
use once_cell::sync::Lazy;
use regex::Regex;

/// Metrics extracted from a classification report.
#[derive(Debug)]
pub struct ClassificationReport {
    /// Overall accuracy, absent when no `accuracy` line was found.
    pub accuracy: Option<f64>,
    /// Per-class F1 scores in row order.
    pub f1_scores: Vec<f64>,
}

impl ClassificationReport {
    /// Arithmetic mean of the per-class F1 scores, 0.0 when no class rows
    /// were parsed.
    pub fn f1_average(&self) -> f64 {
        if self.f1_scores.is_empty() {
            return 0.0;
        }
        self.f1_scores.iter().sum::<f64>() / self.f1_scores.len() as f64
    }
}

static ACCURACY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"accuracy\s+([\d.]+)").expect("valid accuracy pattern"));

/// Parses sklearn-style classification report text.
///
/// The expected shape is the text emitted by `classification_report`: an
/// `accuracy   <value>` summary line and one row per class label, with the
/// f1-score in the 4th whitespace-separated column:
///
/// ```text
///            0       0.91      0.89      0.90       120
///            1       0.84      0.87      0.85       100
///
///     accuracy                           0.88       220
/// ```
///
/// Summary rows (`macro avg`, `weighted avg`) do not start with a digit and
/// are ignored. Malformed f1 tokens are skipped silently.
pub struct ClassificationReportParser;

impl ReportParser<ClassificationReport> for ClassificationReportParser {
    fn parse(&self, raw: &str) -> Result<ClassificationReport, GraderError> {
        let mut accuracy = None;
        let mut f1_scores = Vec::new();

        for line in raw.lines() {
            let line = line.trim();

            if line.starts_with("accuracy") {
                if let Some(caps) = ACCURACY_RE.captures(line) {
                    if let Ok(value) = caps[1].parse::<f64>() {
                        accuracy = Some(value);
                    }
                }
            } else if line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                // Per-class row: <label> <precision> <recall> <f1> <support>
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() >= 4 {
                    if let Ok(f1) = parts[3].parse::<f64>() {
                        f1_scores.push(f1);
                    }
                }
            }
        }

        Ok(ClassificationReport {
            accuracy,
            f1_scores,
        })
    }
}
