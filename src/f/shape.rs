use ndarray::Array2;

use crate::error::WeftError;

/// Element-wise sum of two same-shaped matrices. Dims are checked up front
/// rather than leaning on ndarray's broadcast panic.
pub fn add(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>, WeftError> {
    if a.dim() != b.dim() {
        return Err(WeftError::ShapeMismatch {
            op: "add",
            lhs: a.shape().to_vec(),
            rhs: b.shape().to_vec(),
        });
    }

    Ok(a + b)
}

/// Sum of every element of a matrix.
pub fn sum(x: &Array2<f64>) -> f64 {
    x.sum()
}
