use crate::error::{PerceptronError, Result};

/// Cross-entropy: how unlikely an arrangement of outcomes is under a set of
/// predicted probabilities. Lower is better.
///
/// No epsilon is added inside `ln`; a probability of exactly 0 or 1 on the
/// wrong side yields `Inf` (or `NaN`) rather than an error.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Two-class cross-entropy:
    ///   L = -Σ(y·ln(p) + (1 - y)·ln(1 - p))
    ///
    /// `expected`  — binary / one-hot indicators, one per event
    /// `predicted` — probability of each event, strictly inside (0, 1)
    pub fn binary(expected: &[f64], predicted: &[f64]) -> Result<f64> {
        check_lengths(expected.len(), predicted.len())?;
        let sum: f64 = expected.iter().zip(predicted.iter())
            .map(|(y, p)| y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            .sum();
        Ok(-sum)
    }

    /// Multi-class cross-entropy over a batch of samples:
    ///   L = -Σ_i Σ_j y_ij·ln(p_ij)
    ///
    /// Row `i` of `expected` is the one-hot target for sample `i`; row `i` of
    /// `predicted` is its class distribution (e.g. a softmax output).
    pub fn categorical(expected: &[Vec<f64>], predicted: &[Vec<f64>]) -> Result<f64> {
        check_lengths(expected.len(), predicted.len())?;
        let mut sum = 0.0;
        for (y_row, p_row) in expected.iter().zip(predicted.iter()) {
            check_lengths(y_row.len(), p_row.len())?;
            sum += y_row.iter().zip(p_row.iter())
                .map(|(y, p)| y * p.ln())
                .sum::<f64>();
        }
        Ok(-sum)
    }
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(PerceptronError::LengthMismatch { left, right });
    }
    Ok(())
}
