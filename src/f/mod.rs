pub mod activation;
pub mod shape;

pub use activation::*;
pub use shape::*;
