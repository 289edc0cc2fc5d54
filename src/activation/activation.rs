use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Maps a linear score `X·W + b` to a prediction.
///
/// - `Step`    — discrete: 1.0 when `score >= 0`, otherwise 0.0. The boundary
///               itself is classified positive.
/// - `Sigmoid` — continuous: `1 / (1 + e^-score)`, a probability in (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Step,
    Sigmoid,
}

impl Activation {
    pub fn function(&self, score: f64) -> f64 {
        match self {
            Activation::Step => if score >= 0.0 { 1.0 } else { 0.0 },
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-score)),
        }
    }
}
