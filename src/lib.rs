mod activation;
mod error;
pub mod f;
pub mod graph;
pub mod layers;

pub use activation::{Activation, Activations, Sigmoid};
pub use error::WeftError;
pub use graph::Weft;
pub use layers::Dense;
