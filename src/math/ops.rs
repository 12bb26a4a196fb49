//! Element-wise and matrix-product arithmetic.
//!
//! The named methods return [`Result`]; the `std::ops` impls on references are
//! sugar over them and panic on a dimension mismatch.
use std::ops::{Add, Mul, Neg, Rem, Sub};

use crate::error::{fail_if, MatrixError, Operation, Result};
use crate::math::matrix::Matrix;

/// Right-hand side of [`Matrix::multiply`].
#[derive(Debug, Clone, Copy)]
pub enum Multiplier<'a> {
    Scalar(f64),
    Matrix(&'a Matrix),
}

impl From<f64> for Multiplier<'_> {
    fn from(value: f64) -> Self {
        Multiplier::Scalar(value)
    }
}

impl<'a> From<&'a Matrix> for Multiplier<'a> {
    fn from(value: &'a Matrix) -> Self {
        Multiplier::Matrix(value)
    }
}

impl Matrix {
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        fail_if(
            !self.is_same_order(other),
            MatrixError::DimensionMismatch(Operation::Addition),
        )?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        fail_if(
            !self.is_same_order(other),
            MatrixError::DimensionMismatch(Operation::Subtraction),
        )?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Scalar or matrix product.
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap().data(), vec![vec![22.0, 28.0], vec![49.0, 64.0]]);
    /// assert_eq!(a.multiply(2.0).unwrap().at(1, 2).unwrap(), 12.0);
    /// ```
    pub fn multiply<'a, M>(&self, rhs: M) -> Result<Matrix>
    where
        M: Into<Multiplier<'a>>,
    {
        match rhs.into() {
            Multiplier::Scalar(k) => Ok(self.mapv(|v| v * k)),
            Multiplier::Matrix(other) => self.matmul(other),
        }
    }

    fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        fail_if(
            self.columns() != other.rows(),
            MatrixError::DimensionMismatch(Operation::Multiplication),
        )?;
        let (n, m) = (self.rows(), other.columns());
        let mut result = Matrix::zeros_unchecked(n, m);
        for i in 0..n {
            let lhs = self.row_slice(i);
            for j in 0..m {
                result[(i, j)] = lhs
                    .iter()
                    .enumerate()
                    .map(|(k, value)| value * other[(k, j)])
                    .sum();
            }
        }
        Ok(result)
    }

    /// Element-wise remainder. Follows `f64 %`: the sign of each result matches
    /// the element, not the divisor.
    pub fn modulo(&self, modulo: f64) -> Matrix {
        self.mapv(|v| v % modulo)
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        match self.subtract(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.mapv(|v| v * rhs)
    }
}

impl<'a> Rem<f64> for &'a Matrix {
    type Output = Matrix;

    fn rem(self, rhs: f64) -> Self::Output {
        self.modulo(rhs)
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.mapv(|v| -v)
    }
}
