use std::f64::consts::E;

/// Logistic function, 1 / (1 + e^(-x)).
///
/// Numeric policy is permissive IEEE-754: the exponential is allowed to
/// overflow or underflow, so extreme inputs saturate to exactly 0.0 or 1.0
/// rather than clamping or erroring. Finite moderate inputs stay strictly
/// inside (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1. / (1. + E.powf(-x))
}
