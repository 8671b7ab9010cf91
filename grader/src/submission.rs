use crate::error::GraderError;
use std::fs;
use std::path::Path;

/// Text report holding the classification metrics.
pub const REPORT_FILE: &str = "model_performance.txt";
/// Confusion matrix plot. Existence-only, contents unchecked.
pub const CONFUSION_MATRIX_FILE: &str = "confusion_matrix.png";
/// ROC curve plot. Existence-only, contents unchecked.
pub const ROC_CURVE_FILE: &str = "roc_curve.png";

/// The artifacts every submission must contain.
pub const REQUIRED_FILES: [&str; 3] = [REPORT_FILE, CONFUSION_MATRIX_FILE, ROC_CURVE_FILE];

pub fn check_submission_dir(dir: &Path) -> Result<(), GraderError> {
    if !dir.exists() {
        return Err(GraderError::MissingDirectory(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    if !dir.is_dir() {
        return Err(GraderError::MissingDirectory(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    Ok(())
}

/// Returns the subset of `required` names not present in `dir`, in input order.
pub fn missing_required_files(dir: &Path, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !dir.join(name.as_str()).is_file())
        .cloned()
        .collect()
}

/// Reads the performance report out of the submission directory.
///
/// Presence is re-checked here even though the caller has already run the
/// file check; the file can disappear between the two steps.
pub fn read_report(dir: &Path) -> Result<String, GraderError> {
    let path = dir.join(REPORT_FILE);

    if !path.is_file() {
        return Err(GraderError::MissingFile(format!(
            "File not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(&path)
        .map_err(|e| GraderError::IoError(format!("{}: {}", path.display(), e)))
}
