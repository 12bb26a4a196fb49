//! Conversions between [`Matrix`] and `ndarray::Array2<f64>`.

use ndarray::Array2;

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    pub fn to_ndarray(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(i, j)| self[(i, j)])
    }
}

impl From<Matrix> for Array2<f64> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_ndarray()
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(array: Array2<f64>) -> Result<Self> {
        Matrix::try_from(&array)
    }
}

impl<'a> TryFrom<&'a Array2<f64>> for Matrix {
    type Error = MatrixError;

    fn try_from(array: &'a Array2<f64>) -> Result<Self> {
        // `iter` walks in logical order regardless of memory layout.
        Matrix::from_shape_vec(array.dim(), array.iter().copied().collect())
    }
}
