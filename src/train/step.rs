use tracing::trace;

use crate::error::{PerceptronError, Result};
use crate::math::vector::add_scaled;
use crate::model::perceptron::Perceptron;

/// One pass of the perceptron rule over every point, in the given order.
///
/// For each point the step prediction is compared with the label:
/// - label 1, predicted 0: `W += learn_rate * X`, `b += learn_rate`
/// - label 0, predicted 1: `W -= learn_rate * X`, `b -= learn_rate`
/// - otherwise the model is left alone
///
/// Each update is visible to the predictions for the points after it.
/// Returns how many points moved the boundary.
pub fn perceptron_step(
    features: &[Vec<f64>],
    labels: &[u8],
    model: &mut Perceptron,
    learn_rate: f64,
) -> Result<usize> {
    if features.len() != labels.len() {
        return Err(PerceptronError::LengthMismatch {
            left: features.len(),
            right: labels.len(),
        });
    }

    let mut updates = 0;
    for (i, (x, &label)) in features.iter().zip(labels.iter()).enumerate() {
        let predicted = model.predict_discrete(x)?;
        let factor = match (label, predicted) {
            (1, 0) => learn_rate,
            (0, 1) => -learn_rate,
            _ => continue,
        };
        add_scaled(&mut model.weights, x, factor)?;
        model.bias += factor;
        updates += 1;
        trace!(point = i, label, predicted, bias = model.bias, "boundary moved");
    }
    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn false_negative_pulls_boundary_towards_point() {
        let mut m = Perceptron::new(vec![0.0, 0.0], -1.0);
        let n = perceptron_step(&[vec![1.0, 2.0]], &[1], &mut m, 0.1).unwrap();
        assert_eq!(n, 1);
        assert!(close(m.weights[0], 0.1) && close(m.weights[1], 0.2));
        assert!(close(m.bias, -0.9));
    }

    #[test]
    fn false_positive_pushes_boundary_away() {
        let mut m = Perceptron::new(vec![1.0, 1.0], 0.0);
        let n = perceptron_step(&[vec![1.0, 1.0]], &[0], &mut m, 0.1).unwrap();
        assert_eq!(n, 1);
        assert!(close(m.weights[0], 0.9) && close(m.weights[1], 0.9));
        assert!(close(m.bias, -0.1));
    }

    #[test]
    fn correct_points_leave_model_untouched() {
        let mut m = Perceptron::new(vec![1.0, 1.0], 0.0);
        let before = m.clone();
        let features = vec![vec![1.0, 1.0], vec![-1.0, -1.0], vec![3.0, -2.0]];
        let n = perceptron_step(&features, &[1, 0, 1], &mut m, 0.5).unwrap();
        assert_eq!(n, 0);
        assert_eq!(m, before);
    }

    #[test]
    fn updates_thread_through_the_pass() {
        // (0,0) is correctly negative under the initial bias, but the update
        // made for (1,0) first flips it positive.
        let mut m = Perceptron::new(vec![0.0, 0.0], -0.05);
        let features = vec![vec![1.0, 0.0], vec![0.0, 0.0]];
        let n = perceptron_step(&features, &[1, 0], &mut m, 0.1).unwrap();
        assert_eq!(n, 2);
        assert!(close(m.weights[0], 0.1) && close(m.weights[1], 0.0));
        assert!(close(m.bias, -0.05));
    }

    #[test]
    fn works_in_any_dimension() {
        let mut m = Perceptron::new(vec![0.0, 0.0, 0.0], -1.0);
        perceptron_step(&[vec![1.0, -2.0, 4.0]], &[1], &mut m, 0.5).unwrap();
        assert_eq!(m.weights, vec![0.5, -1.0, 2.0]);
        assert_eq!(m.bias, -0.5);
    }

    #[test]
    fn dimension_mismatch_propagates() {
        let mut m = Perceptron::new(vec![0.0, 0.0], 0.0);
        let err = perceptron_step(&[vec![1.0]], &[1], &mut m, 0.1).unwrap_err();
        assert!(matches!(err, PerceptronError::DimensionMismatch { .. }));
    }

    #[test]
    fn label_count_must_match() {
        let mut m = Perceptron::new(vec![0.0, 0.0], 0.0);
        let err = perceptron_step(&[vec![1.0, 1.0]], &[1, 0], &mut m, 0.1).unwrap_err();
        assert!(matches!(err, PerceptronError::LengthMismatch { left: 1, right: 2 }));
    }

    proptest! {
        #[test]
        fn correctly_classified_point_is_a_no_op(
            x in prop::collection::vec(-100.0..100.0f64, 2),
            w in prop::collection::vec(-10.0..10.0f64, 2),
            b in -10.0..10.0f64,
            learn_rate in 0.001..1.0f64,
        ) {
            let mut m = Perceptron::new(w, b);
            let label = m.predict_discrete(&x).unwrap();
            let before = m.clone();
            let n = perceptron_step(&[x], &[label], &mut m, learn_rate).unwrap();
            prop_assert_eq!(n, 0);
            prop_assert_eq!(m, before);
        }
    }
}
