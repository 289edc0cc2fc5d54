pub mod step;
pub mod train_config;
pub mod trainer;

pub use step::perceptron_step;
pub use train_config::TrainConfig;
pub use trainer::{train, train_dataset, train_with_rng};
