//! Labelled points for binary classification.
//!
//! Invariants enforced on construction:
//! - `features` and `labels` have equal length
//! - every feature vector has the same dimensionality
//! - every label is 0 or 1
//!
//! CSV format accepted by [`Dataset::from_csv`]:
//! - UTF-8, comma-separated, one point per row: `f1,f2,...,fn,label`
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Blank lines are skipped

use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<u8>,
}

/// Unvalidated on-disk shape; labels are floats so a bad value can be reported as written.
#[derive(Deserialize)]
struct RawDataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl Dataset {
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<u8>) -> Result<Dataset> {
        check_shape(&features, &labels)?;
        Ok(Dataset { features, labels })
    }

    /// The four-point linearly separable set: (1,1) and (2,2) positive,
    /// (-1,-1) and (-2,-2) negative.
    pub fn toy_separable() -> Dataset {
        Dataset {
            features: vec![
                vec![1.0, 1.0],
                vec![2.0, 2.0],
                vec![-1.0, -1.0],
                vec![-2.0, -2.0],
            ],
            labels: vec![1, 1, 0, 0],
        }
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of each feature vector, or `None` for an empty dataset.
    pub fn dimension(&self) -> Option<usize> {
        self.features.first().map(Vec::len)
    }

    /// Parses CSV text into a dataset. The last column is the label.
    pub fn from_csv(text: &str) -> Result<Dataset> {
        let mut lines = text.lines().enumerate().peekable();

        if let Some((_, first)) = lines.peek() {
            if is_header(first) {
                lines.next();
            }
        }

        let mut features: Vec<Vec<f64>> = Vec::new();
        let mut labels: Vec<u8> = Vec::new();

        for (idx, line) in lines {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() < 2 {
                return Err(PerceptronError::Parse {
                    line: line_no,
                    message: format!(
                        "expected at least 2 columns (features + label), got {}",
                        cells.len()
                    ),
                });
            }

            let values = parse_floats(&cells, line_no)?;
            let (feats, label) = values.split_at(values.len() - 1);
            labels.push(to_label(label[0], labels.len())?);
            features.push(feats.to_vec());
        }

        if features.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        Dataset::new(features, labels)
    }

    pub fn load_csv(path: &str) -> Result<Dataset> {
        let text = std::fs::read_to_string(path)?;
        Dataset::from_csv(&text)
    }

    /// Deserializes `{ "features": [[..], ..], "labels": [..] }` and validates it.
    pub fn from_json(text: &str) -> Result<Dataset> {
        let raw: RawDataset = serde_json::from_str(text)?;
        raw.into_dataset()
    }

    pub fn load_json(path: &str) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let raw: RawDataset = serde_json::from_reader(reader)?;
        raw.into_dataset()
    }

    /// Serializes the dataset to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Checks the parallel-sequence invariants shared by `Dataset::new` and the trainer.
pub(crate) fn check_shape(features: &[Vec<f64>], labels: &[u8]) -> Result<()> {
    if features.len() != labels.len() {
        return Err(PerceptronError::LengthMismatch {
            left: features.len(),
            right: labels.len(),
        });
    }
    if let Some(first) = features.first() {
        let dim = first.len();
        if let Some(row) = features.iter().find(|row| row.len() != dim) {
            return Err(PerceptronError::DimensionMismatch {
                expected: dim,
                found: row.len(),
            });
        }
    }
    if let Some((index, &value)) = labels.iter().enumerate().find(|&(_, &l)| l > 1) {
        return Err(PerceptronError::InvalidLabel {
            index,
            value: value as f64,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

impl RawDataset {
    fn into_dataset(self) -> Result<Dataset> {
        let labels = self.labels.iter()
            .enumerate()
            .map(|(i, &v)| to_label(v, i))
            .collect::<Result<Vec<u8>>>()?;
        Dataset::new(self.features, labels)
    }
}

fn to_label(value: f64, index: usize) -> Result<u8> {
    if value == 0.0 {
        Ok(0)
    } else if value == 1.0 {
        Ok(1)
    } else {
        Err(PerceptronError::InvalidLabel { index, value })
    }
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    line.split(',').any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

fn parse_floats(cells: &[&str], line: usize) -> Result<Vec<f64>> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| PerceptronError::Parse {
                line,
                message: format!("'{}' is not a valid number", c.trim()),
            })
        })
        .collect()
}
