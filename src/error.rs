use thiserror::Error;

/// Errors surfaced by weft. Every variant is fatal for the run; nothing is
/// recovered locally.
#[derive(Error, Debug, PartialEq)]
pub enum WeftError {
    #[error("shape mismatch in {op}: {lhs:?} is incompatible with {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },
}
