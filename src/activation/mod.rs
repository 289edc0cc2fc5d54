pub mod activation;
pub mod softmax;

pub use activation::Activation;
pub use softmax::softmax;
