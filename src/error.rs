use thiserror::Error;

pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Everything that can abort a prediction, training run or dataset load.
///
/// Out-of-domain floating-point inputs (e.g. `ln(0)`) are not errors; they
/// surface as `NaN`/`Inf` in the returned value.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// A feature vector and a weight vector (or two feature rows) differ in length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Two sequences that must be parallel (features/labels, Y/P) differ in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("label {value} at index {index} is not 0 or 1")]
    InvalidLabel { index: usize, value: f64 },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
