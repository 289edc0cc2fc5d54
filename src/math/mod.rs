pub mod vector;

pub use vector::{add_scaled, dot, random_uniform};
