//! Algebraic properties of the dense matrix.

use lss_core::{Accumulator, CoreError, Matrix, Real, Tolerances};
use nalgebra as na;
use proptest::prelude::*;

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(-10.0_f64..10.0_f64, rows * cols).prop_map(move |values| {
        let rows_data: Vec<&[Real]> = values.chunks(cols).collect();
        Matrix::from_rows(rows_data.as_slice()).unwrap()
    })
}

fn dims() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (1usize..5, 1usize..5, 1usize..5, 1usize..5)
}

fn loose() -> Tolerances {
    Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    }
}

proptest! {
    #[test]
    fn transpose_is_an_involution(a in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| matrix(r, c))) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn multiply_is_associative(
        (a, b, c) in dims().prop_flat_map(|(n, m, p, q)| (matrix(n, m), matrix(m, p), matrix(p, q)))
    ) {
        let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
        let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        prop_assert!(left.approx_eq(&right, loose()), "{left} != {right}");
    }

    #[test]
    fn multiply_distributes_over_add(
        (a, b, c) in dims().prop_flat_map(|(n, m, p, _)| (matrix(n, m), matrix(m, p), matrix(m, p)))
    ) {
        let left = a.multiply(&b.add(&c).unwrap()).unwrap();
        let right = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
        prop_assert!(left.approx_eq(&right, loose()), "{left} != {right}");
    }

    #[test]
    fn multiply_matches_nalgebra(
        (a, b) in dims().prop_flat_map(|(n, m, p, _)| (matrix(n, m), matrix(m, p)))
    ) {
        let na_a = na::DMatrix::from_row_slice(a.rows(), a.cols(), a.as_slice());
        let na_b = na::DMatrix::from_row_slice(b.rows(), b.cols(), b.as_slice());
        let expected = na_a * na_b;

        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.shape(), (expected.nrows(), expected.ncols()));
        for i in 0..product.rows() {
            for j in 0..product.cols() {
                prop_assert!((product[(i, j)] - expected[(i, j)]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn mismatched_multiply_is_rejected(
        (a, b) in (1usize..5, 1usize..5, 1usize..5)
            .prop_filter("inner dims must differ", |(_, m, k)| m != k)
            .prop_flat_map(|(n, m, k)| (matrix(n, m), matrix(k, n)))
    ) {
        let (a0, b0) = (a.clone(), b.clone());
        let err = a.multiply(&b).unwrap_err();
        prop_assert!(
            matches!(err, CoreError::DimensionMismatch { op: "multiply", .. }),
            "unexpected error: {err:?}"
        );
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    #[test]
    fn appended_columns_are_preserved(
        columns in (1usize..5).prop_flat_map(|n| prop::collection::vec(matrix(n, 1), 1..10))
    ) {
        let rows = columns[0].rows();
        let mut acc = Accumulator::new(rows);
        for (k, column) in columns.iter().enumerate() {
            acc.append_column(column).unwrap();
            prop_assert_eq!(acc.cols(), k + 1);
        }

        let grown = acc.to_matrix();
        for (k, column) in columns.iter().enumerate() {
            prop_assert_eq!(&grown.col(k), column);
        }
    }
}

#[test]
fn mismatched_add_is_rejected() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(3, 2);
    let err = a.add(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dimension mismatch in add: left is 2x3, right is 3x2"
    );
}
