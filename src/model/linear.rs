use crate::activation::activation::Activation;
use crate::error::Result;
use crate::math::vector::dot;

/// Applies the linear boundary equation: `X·W + b`.
pub fn score(x: &[f64], w: &[f64], b: f64) -> Result<f64> {
    Ok(dot(x, w)? + b)
}

/// Step-function prediction: 1 if the point lies on or above the boundary, else 0.
pub fn predict_discrete(x: &[f64], w: &[f64], b: f64) -> Result<u8> {
    Ok(Activation::Step.function(score(x, w, b)?) as u8)
}

/// Sigmoid prediction: probability in (0, 1) that the point is positive.
pub fn predict_sigmoid(x: &[f64], w: &[f64], b: f64) -> Result<f64> {
    Ok(Activation::Sigmoid.function(score(x, w, b)?))
}
