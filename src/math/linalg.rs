//! Classical linear algebra on [`Matrix`]: transpose, determinant by cofactor
//! expansion, minors, cofactors, trace and the adjugate inverse.
//!
//! The determinant expands recursively along the first row, so it runs in
//! factorial time. That is fine for the small matrices this crate targets and
//! keeps the arithmetic exactly as written on paper (no pivoting).
use crate::error::{fail_if, MatrixError, Operation, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    /// `columns x rows` matrix with `result[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut result = Matrix::zeros_unchecked(cols, rows);
        for (i, row) in self.iter_rows().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                result[(j, i)] = value;
            }
        }
        result
    }

    pub fn determinant(&self) -> Result<f64> {
        fail_if(!self.is_square(), MatrixError::NonSquareMatrix)?;
        log::trace!("determinant of {}x{} matrix", self.rows(), self.columns());
        let det = match self.rows() {
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            _ => {
                let mut sum = 0.0;
                for (i, &value) in self.row_slice(0).iter().enumerate() {
                    sum += value * self.get_cofactor(0, i)?;
                }
                sum
            }
        };
        Ok(det)
    }

    /// `(-1)^(row + col)` times the determinant of the minor at `(row, col)`.
    pub fn get_cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.get_minor(row, col)?;
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * minor.determinant()?)
    }

    /// The matrix left after deleting `row` and `col`.
    ///
    /// Fails with `IndexOutOfRange` for an index outside the matrix, and with
    /// `DimensionMismatch` when nothing would be left (a single row or column).
    pub fn get_minor(&self, row: usize, col: usize) -> Result<Matrix> {
        fail_if(
            row >= self.rows() || col >= self.columns(),
            MatrixError::IndexOutOfRange,
        )?;
        fail_if(
            self.rows() < 2 || self.columns() < 2,
            MatrixError::DimensionMismatch(Operation::Other),
        )?;
        let data = self
            .iter_rows()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, values)| {
                values
                    .iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Matrix::from_shape_vec((self.rows() - 1, self.columns() - 1), data)
    }

    pub fn trace(&self) -> Result<f64> {
        fail_if(!self.is_square(), MatrixError::NonSquareMatrix)?;
        Ok((0..self.rows()).map(|i| self[(i, i)]).sum())
    }

    /// Matrix of cofactors, `C[i][j] = cofactor(i, j)`.
    pub fn cofactor_matrix(&self) -> Result<Matrix> {
        fail_if(!self.is_square(), MatrixError::NonSquareMatrix)?;
        let n = self.rows();
        if n == 1 {
            // The cofactor of the only element is the empty product.
            return Matrix::identity(1);
        }
        let mut result = Matrix::zeros_unchecked(n, n);
        for i in 0..n {
            for j in 0..n {
                result[(i, j)] = self.get_cofactor(i, j)?;
            }
        }
        Ok(result)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// `adjugate / determinant`.
    ///
    /// The singularity check is an exact comparison with zero, so a nearly
    /// singular matrix still inverts (with large entries).
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.data(), vec![vec![-2.0, 1.0], vec![1.5, -0.5]]);
    /// ```
    pub fn inverse(&self) -> Result<Matrix> {
        fail_if(!self.is_square(), MatrixError::NonSquareMatrix)?;
        let det = self.determinant()?;
        log::debug!("inverse: determinant = {}", det);
        fail_if(det == 0.0, MatrixError::ZeroDeterminant(Operation::Inverse))?;
        Ok(self.cofactor_matrix()?.mapv(|c| c / det).transpose())
    }

    /// Copy of the row vectors as they are; no basis reduction is done.
    pub fn row_space(&self) -> Matrix {
        self.clone()
    }

    /// The column vectors laid out as rows; no basis reduction is done.
    pub fn col_space(&self) -> Matrix {
        self.transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cofactor_signs_alternate() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]).unwrap();
        assert_eq!(m.get_cofactor(0, 0).unwrap(), -24.0);
        assert_eq!(m.get_cofactor(0, 1).unwrap(), 20.0);
        assert_eq!(m.get_cofactor(1, 0).unwrap(), 18.0);
    }

    #[test]
    fn one_by_one_inverse() {
        let m = Matrix::from_rows(&[[4.0]]).unwrap();
        assert_eq!(m.inverse().unwrap().as_slice(), &[0.25]);
    }
}
