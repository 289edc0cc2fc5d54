/// Turns one raw score per class into a probability distribution:
///   softmax(s)_i = e^{s_i} / Σ_j e^{s_j}
///
/// The maximum score is subtracted before exponentiating. This leaves the
/// result unchanged mathematically but keeps `exp` from overflowing for
/// large scores. An empty input yields an empty output.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
