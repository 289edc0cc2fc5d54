use serde::{Serialize, Deserialize};

/// Hyperparameters for a `train` run. Immutable for the duration of the run.
///
/// # Fields
/// - `learn_rate` — how far the boundary moves towards a misclassified point
/// - `epochs`     — number of full passes over the dataset; there is no
///                  early stopping, every epoch always runs
/// - `seed`       — seeds the generator that draws the initial weights and
///                  bias, so equal seeds give bit-identical runs
///
/// Missing fields in a JSON config fall back to the defaults
/// (`learn_rate = 0.01`, `epochs = 100`, `seed = 0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learn_rate: f64,
    pub epochs: usize,
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learn_rate: 0.01,
            epochs: 100,
            seed: 0,
        }
    }
}

impl TrainConfig {
    pub fn new(learn_rate: f64, epochs: usize, seed: u64) -> Self {
        TrainConfig { learn_rate, epochs, seed }
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> crate::error::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
