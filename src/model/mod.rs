pub mod linear;
pub mod perceptron;

pub use linear::{predict_discrete, predict_sigmoid, score};
pub use perceptron::Perceptron;
