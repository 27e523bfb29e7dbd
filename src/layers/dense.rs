use core::fmt::Debug;

use ndarray::{Array1, Array2};
use serde::{self, Deserialize, Serialize};

use crate::error::WeftError;

/// Affine layer: forward computes x . w + b with b broadcast across rows.
///
/// The weights are fixed at construction and never mutated; every forward
/// call is a pure function of its input.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Dense {
    w: Array2<f64>,
    b: Array1<f64>,
}

impl Dense {
    pub fn new(w: Array2<f64>, b: Array1<f64>) -> Result<Dense, WeftError> {
        if b.len() != w.ncols() {
            return Err(WeftError::ShapeMismatch {
                op: "dense bias",
                lhs: w.shape().to_vec(),
                rhs: b.shape().to_vec(),
            });
        }

        Ok(Dense { w, b })
    }

    /// Columns the input must have for forward to be well-formed.
    pub fn input_width(&self) -> usize {
        self.w.nrows()
    }

    pub fn forward(&self, x: &Array2<f64>) -> Result<Array2<f64>, WeftError> {
        if x.ncols() != self.w.nrows() {
            return Err(WeftError::ShapeMismatch {
                op: "dense forward",
                lhs: x.shape().to_vec(),
                rhs: self.w.shape().to_vec(),
            });
        }

        Ok(x.dot(&self.w) + &self.b)
    }
}
