use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::data::dataset::{check_shape, Dataset};
use crate::error::{PerceptronError, Result};
use crate::model::perceptron::Perceptron;
use crate::train::step::perceptron_step;
use crate::train::train_config::TrainConfig;

/// Trains a perceptron from random initial parameters.
///
/// Weights and bias are drawn from a generator seeded with `config.seed`,
/// then `perceptron_step` runs exactly `config.epochs` times, each epoch
/// starting from the previous one's parameters.
///
/// # Errors
/// - `LengthMismatch` if `features` and `labels` differ in length
/// - `DimensionMismatch` if the feature vectors are not all the same length
/// - `InvalidLabel` if a label is not 0 or 1
/// - `EmptyDataset` if there are no points to infer the dimensionality from
pub fn train(features: &[Vec<f64>], labels: &[u8], config: &TrainConfig) -> Result<Perceptron> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    train_with_rng(features, labels, config.learn_rate, config.epochs, &mut rng)
}

pub fn train_dataset(dataset: &Dataset, config: &TrainConfig) -> Result<Perceptron> {
    train(dataset.features(), dataset.labels(), config)
}

/// Same as [`train`] but draws the initial parameters from the caller's `rng`.
pub fn train_with_rng<R: Rng + ?Sized>(
    features: &[Vec<f64>],
    labels: &[u8],
    learn_rate: f64,
    epochs: usize,
    rng: &mut R,
) -> Result<Perceptron> {
    check_shape(features, labels)?;
    let dimension = features
        .first()
        .map(Vec::len)
        .ok_or(PerceptronError::EmptyDataset)?;

    let mut model = Perceptron::random(dimension, rng);
    debug!(weights = ?model.weights, bias = model.bias, "initial parameters");

    for epoch in 1..=epochs {
        let updates = perceptron_step(features, labels, &mut model, learn_rate)?;
        debug!(epoch, updates, "epoch finished");
    }

    info!(
        epochs,
        learn_rate,
        points = features.len(),
        weights = ?model.weights,
        bias = model.bias,
        "training finished"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_epochs_returns_seeded_initial_parameters() {
        let data = Dataset::toy_separable();
        let model = train_dataset(&data, &TrainConfig::new(0.1, 0, 9)).unwrap();
        let expected = Perceptron::random(2, &mut StdRng::seed_from_u64(9));
        assert_eq!(model, expected);
    }

    #[test]
    fn one_epoch_equals_one_step_from_the_same_start() {
        let data = Dataset::toy_separable();
        let mut manual = Perceptron::random(2, &mut StdRng::seed_from_u64(3));
        perceptron_step(data.features(), data.labels(), &mut manual, 0.1).unwrap();

        let trained = train_dataset(&data, &TrainConfig::new(0.1, 1, 3)).unwrap();
        assert_eq!(trained, manual);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = train(&[], &[], &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, PerceptronError::EmptyDataset));
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let err = train(&[vec![1.0, 1.0]], &[1, 0], &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, PerceptronError::LengthMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn non_binary_labels_are_rejected() {
        let err = train(&[vec![1.0, 1.0]], &[2], &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, PerceptronError::InvalidLabel { index: 0, .. }));
    }

    #[test]
    fn ragged_features_are_rejected() {
        let features = vec![vec![1.0, 1.0], vec![1.0]];
        let err = train(&features, &[1, 0], &TrainConfig::default()).unwrap_err();
        assert!(matches!(err, PerceptronError::DimensionMismatch { .. }));
    }

    #[test]
    fn injected_rng_drives_initialisation() {
        let data = Dataset::toy_separable();
        let mut rng = StdRng::seed_from_u64(11);
        let a = train_with_rng(data.features(), data.labels(), 0.1, 0, &mut rng).unwrap();
        let b = Perceptron::random(2, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
