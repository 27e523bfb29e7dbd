use ndarray::{array, Array2};

use weft::{Activations, Dense, Weft, WeftError};

fn reference_weft() -> Weft {
    let dense =
        Dense::new(array![[1., -1.], [-1., 2.]], array![-2.5, 2.5]).unwrap();
    Weft::new(dense, Activations::Sigmoid)
}

fn reference_inputs() -> (Array2<f64>, Array2<f64>) {
    (
        array![[1.0, 2.0], [3.0, 4.0]],
        array![[3.141, 1.414], [0.0, 42.0]],
    )
}

// Captured from the reference run; pinned so regressions show up as a
// numeric drift rather than a silent change.
const REFERENCE_RES: f64 = 8.360636886487102;

#[test]
fn reference_scenario() {
    let weft = reference_weft();
    let (input_1, input_2) = reference_inputs();
    let res = weft.run(&input_1, &input_2).unwrap();
    assert!(
        (res - REFERENCE_RES).abs() < 1e-12,
        "res = {}, expected {}",
        res,
        REFERENCE_RES
    );
}

#[test]
fn run_is_deterministic() {
    let weft = reference_weft();
    let (input_1, input_2) = reference_inputs();
    let first = weft.run(&input_1, &input_2).unwrap();
    let second = weft.run(&input_1, &input_2).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn scalar_regardless_of_row_count() {
    let weft = reference_weft();
    for rows in [1, 2, 5] {
        let a = Array2::<f64>::zeros((rows, 2));
        let b = Array2::<f64>::ones((rows, 2));
        let res = weft.run(&a, &b).unwrap();
        assert!(res.is_finite());
    }
}

#[test]
fn shape_mismatch_is_typed() {
    let weft = reference_weft();
    let a = Array2::<f64>::zeros((2, 3));
    let b = Array2::<f64>::zeros((2, 2));
    match weft.run(&a, &b) {
        Err(WeftError::ShapeMismatch { op, lhs, rhs }) => {
            assert_eq!(op, "dense forward");
            assert_eq!(lhs, vec![2, 3]);
            assert_eq!(rhs, vec![2, 2]);
        }
        other => panic!("expected shape mismatch, got {:?}", other),
    }
}
