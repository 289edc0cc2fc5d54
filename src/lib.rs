pub mod error;
pub mod math;
pub mod activation;
pub mod model;
pub mod loss;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::activation::Activation;
pub use activation::softmax::softmax;
pub use model::linear::{predict_discrete, predict_sigmoid};
pub use model::perceptron::Perceptron;
pub use loss::cross_entropy::CrossEntropyLoss;
pub use data::dataset::Dataset;
pub use train::train_config::TrainConfig;
pub use train::trainer::{train, train_dataset};

/// Two-class cross-entropy of `predicted` probabilities against `expected` labels.
pub fn cross_entropy(expected: &[f64], predicted: &[f64]) -> Result<f64> {
    CrossEntropyLoss::binary(expected, predicted)
}
