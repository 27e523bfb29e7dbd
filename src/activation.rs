use std::fmt::Debug;
use std::rc::Rc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::f;

pub trait Activation {
    fn a(&self, x: Array2<f64>) -> Array2<f64>;
}

impl Debug for dyn Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActivationFn")
    }
}

/// Logistic activation. Maps each element into (0, 1); extremes saturate to
/// exactly 0 or 1 per the crate's permissive float policy (see f::sigmoid).
pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Rc<Sigmoid> {
        Rc::new(Sigmoid)
    }
}

impl Activation for Sigmoid {
    fn a(&self, x: Array2<f64>) -> Array2<f64> {
        x.map(|v| f::sigmoid(*v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub enum Activations {
    Sigmoid,
}

impl Activations {
    pub fn wake(&self) -> Rc<dyn Activation> {
        match self {
            Activations::Sigmoid => Sigmoid::new(),
        }
    }
}
