use log::debug;
use ndarray::Array2;

use crate::activation::Activations;
use crate::error::WeftError;
use crate::f;
use crate::layers::Dense;

/// A fixed two-input feedforward graph.
///
/// Branch one passes its input through dense + activation twice; branch two
/// passes through once. The three intermediates are merged element-wise and
/// the first hidden state is counted twice in the merge — that double use is
/// part of the graph, not an accident to simplify away.
#[derive(Debug, Clone)]
pub struct Weft {
    dense: Dense,
    activation: Activations,
}

impl Weft {
    pub fn new(dense: Dense, activation: Activations) -> Weft {
        Weft { dense, activation }
    }

    /// Evaluate the graph down to the combined matrix. Both inputs must have
    /// the same shape, with as many columns as the dense layer expects.
    pub fn forward(
        &self,
        input_1: &Array2<f64>,
        input_2: &Array2<f64>,
    ) -> Result<Array2<f64>, WeftError> {
        let activ = self.activation.wake();

        let hidden_1 = activ.a(self.dense.forward(input_1)?);
        debug!("branch one, first pass: {:?}", hidden_1.dim());

        // Second pass runs on the activated output, not the raw input.
        let hidden_2 = activ.a(self.dense.forward(&hidden_1)?);
        debug!("branch one, second pass: {:?}", hidden_2.dim());

        let branch_2 = activ.a(self.dense.forward(input_2)?);
        debug!("branch two: {:?}", branch_2.dim());

        let merged = f::add(&f::add(&hidden_2, &hidden_1)?, &hidden_1)?;
        f::add(&merged, &branch_2)
    }

    /// Evaluate the graph and reduce the combined matrix to one scalar.
    pub fn run(
        &self,
        input_1: &Array2<f64>,
        input_2: &Array2<f64>,
    ) -> Result<f64, WeftError> {
        let combined = self.forward(input_1, input_2)?;
        Ok(f::sum(&combined))
    }
}
