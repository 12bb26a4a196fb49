//! Integration tests for matrix arithmetic and its algebraic properties.

use dense_matrix::{Matrix, MatrixError, Multiplier, Operation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random matrix with small integer entries, so sums and products stay exact.
fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols)
        .map(|_| rng.gen_range(-9..=9) as f64)
        .collect();
    Matrix::from_shape_vec((rows, cols), data).unwrap()
}

// ---------------------------------------------------------------------------
// Addition / subtraction
// ---------------------------------------------------------------------------

#[test]
fn add_element_wise() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let sum = a.add(&a).unwrap();
    assert_eq!(sum.data(), vec![vec![2.0, 4.0, 6.0], vec![8.0, 10.0, 12.0]]);
}

#[test]
fn subtract_element_wise() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let diff = a.subtract(&a).unwrap();
    assert_eq!(diff, Matrix::zeros(2, 3).unwrap());
}

#[test]
fn add_and_subtract_require_same_order() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(3, 2).unwrap();
    assert_eq!(
        a.add(&b),
        Err(MatrixError::DimensionMismatch(Operation::Addition))
    );
    assert_eq!(
        a.subtract(&b),
        Err(MatrixError::DimensionMismatch(Operation::Subtraction))
    );
}

#[test]
fn operands_are_left_untouched() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = a.clone();
    let _ = a.add(&b).unwrap();
    let _ = a.multiply(&b).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn multiply_by_matrix() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.shape(), (2, 2));
    assert_eq!(product.data(), vec![vec![22.0, 28.0], vec![49.0, 64.0]]);
}

#[test]
fn multiply_by_scalar() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let scaled = a.multiply(Multiplier::Scalar(2.0)).unwrap();
    assert_eq!(scaled.data(), vec![vec![2.0, 4.0, 6.0], vec![8.0, 10.0, 12.0]]);
    assert_eq!(a.multiply(2.0).unwrap(), scaled);
}

#[test]
fn multiply_dimension_mismatch() {
    let a = Matrix::zeros(2, 3).unwrap();
    let err = a.multiply(&a).unwrap_err();
    assert_eq!(err, MatrixError::DimensionMismatch(Operation::Multiplication));
    assert_eq!(
        err.to_string(),
        "Matrix dimension mismatch: The number of columns in the first matrix must be equal to the number of rows"
    );
}

// ---------------------------------------------------------------------------
// Modulo
// ---------------------------------------------------------------------------

#[test]
fn modulo_element_wise() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(a.modulo(3.0).data(), vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
}

#[test]
fn modulo_sign_follows_dividend() {
    let a = Matrix::from_rows(&[[-7.0, 7.0], [-1.0, 5.5]]).unwrap();
    let r = a.modulo(3.0);
    assert_eq!(r.data(), vec![vec![-1.0, 1.0], vec![-1.0, 2.5]]);
    let r = a.modulo(-3.0);
    assert_eq!(r.data(), vec![vec![-1.0, 1.0], vec![-1.0, 2.5]]);
}

// ---------------------------------------------------------------------------
// Operator sugar
// ---------------------------------------------------------------------------

#[test]
fn operators_match_named_methods() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[[0.5, -1.0], [2.0, 0.0]]).unwrap();
    assert_eq!(&a + &b, a.add(&b).unwrap());
    assert_eq!(&a - &b, a.subtract(&b).unwrap());
    assert_eq!(&a * &b, a.multiply(&b).unwrap());
    assert_eq!(&a * 3.0, a.multiply(3.0).unwrap());
    assert_eq!(&a % 2.0, a.modulo(2.0));
    assert_eq!(-&a, a.multiply(-1.0).unwrap());
}

#[test]
#[should_panic(expected = "Matrix dimension mismatch")]
fn operator_add_panics_on_mismatch() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(3, 2).unwrap();
    let _ = &a + &b;
}

// ---------------------------------------------------------------------------
// Properties over random matrices
// ---------------------------------------------------------------------------

#[test]
fn add_then_subtract_is_identity() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..25 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, r, c);
        let b = random_matrix(&mut rng, r, c);
        assert!(a.add(&b).unwrap().subtract(&b).unwrap().equals(&a));
    }
}

#[test]
fn multiply_by_identity_is_identity() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..25 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, r, c);
        let id = Matrix::identity(c).unwrap();
        assert!(a.multiply(&id).unwrap().equals(&a));
    }
}

#[test]
fn product_shape_is_outer_dimensions() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_matrix(&mut rng, 2, 4);
    let b = random_matrix(&mut rng, 4, 3);
    assert_eq!(a.multiply(&b).unwrap().shape(), (2, 3));
}
