use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::Activation;
use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::math::vector::random_uniform;
use crate::model::linear;

/// Weight vector and bias of a single linear boundary `W·X + b = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Perceptron {
    pub fn new(weights: Vec<f64>, bias: f64) -> Perceptron {
        Perceptron { weights, bias }
    }

    /// Draws every weight, then the bias, uniformly from `[0, 1)`.
    /// The draw order is fixed so a seeded `rng` always yields the same model.
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Perceptron {
        let weights = random_uniform(dimension, rng);
        let bias = rng.gen::<f64>();
        Perceptron { weights, bias }
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    pub fn score(&self, x: &[f64]) -> Result<f64> {
        linear::score(x, &self.weights, self.bias)
    }

    pub fn predict_discrete(&self, x: &[f64]) -> Result<u8> {
        linear::predict_discrete(x, &self.weights, self.bias)
    }

    pub fn predict_sigmoid(&self, x: &[f64]) -> Result<f64> {
        linear::predict_sigmoid(x, &self.weights, self.bias)
    }

    pub fn predict(&self, x: &[f64], activation: Activation) -> Result<f64> {
        Ok(activation.function(self.score(x)?))
    }

    /// Fraction of points in `dataset` the step predictor labels correctly.
    /// Returns 0.0 for an empty dataset.
    pub fn accuracy(&self, dataset: &Dataset) -> Result<f64> {
        if dataset.is_empty() {
            return Ok(0.0);
        }
        let mut correct = 0usize;
        for (x, &y) in dataset.features().iter().zip(dataset.labels()) {
            if self.predict_discrete(x)? == y {
                correct += 1;
            }
        }
        Ok(correct as f64 / dataset.len() as f64)
    }

    /// Serializes the model to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a model from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Perceptron> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
