use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{fail_if, MatrixError, Operation, Result};

/// Dense, row-major matrix of `f64`.
///
/// A matrix always has at least one row and one column, and every row holds
/// exactly `columns` values. Constructors copy the data they are given, so a
/// matrix never aliases caller memory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Nested-rows representation used on the wire.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    columns: usize,
    data: Vec<Vec<f64>>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = MatrixError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        let (rows, cols, data) = flatten_rows(&repr.data).ok_or(MatrixError::InvalidArguments)?;
        fail_if(
            rows != repr.rows || cols != repr.columns,
            MatrixError::DimensionMismatch(Operation::Other),
        )?;
        Ok(Self { data, rows, cols })
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        MatrixRepr {
            rows: matrix.rows,
            columns: matrix.cols,
            data: matrix.data(),
        }
    }
}

/// Flattens nested rows into a row-major buffer.
///
/// Returns `None` when there are no rows, no columns, or the rows are ragged.
pub(crate) fn flatten_rows<R: AsRef<[f64]>>(rows: &[R]) -> Option<(usize, usize, Vec<f64>)> {
    let cols = rows.first()?.as_ref().len();
    if cols == 0 {
        return None;
    }
    let mut data = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        let row = row.as_ref();
        if row.len() != cols {
            return None;
        }
        data.extend_from_slice(row);
    }
    Some((rows.len(), cols, data))
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Matrix {
    /// A 1x1 zero matrix.
    pub fn new() -> Self {
        Self {
            data: vec![f64::zero()],
            rows: 1,
            cols: 1,
        }
    }

    /// An `n x n` zero matrix.
    pub fn square(n: usize) -> Result<Self> {
        Self::zeros(n, n)
    }

    /// A `rows x columns` zero matrix.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        fail_if(rows == 0 || columns == 0, MatrixError::InvalidArguments)?;
        Ok(Self::zeros_unchecked(rows, columns))
    }

    pub(crate) fn zeros_unchecked(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![f64::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// A `rows x columns` matrix holding a copy of `data`.
    ///
    /// If `data` does not have exactly that shape the matrix is zero-filled
    /// instead; this is not an error.
    pub fn with_data<R: AsRef<[f64]>>(rows: usize, columns: usize, data: &[R]) -> Result<Self> {
        fail_if(rows == 0 || columns == 0, MatrixError::InvalidArguments)?;
        match flatten_rows(data) {
            Some((r, c, data)) if r == rows && c == columns => Ok(Self {
                data,
                rows,
                cols: columns,
            }),
            _ => {
                log::warn!(
                    "data does not fit a {}x{} matrix, falling back to zeros",
                    rows,
                    columns
                );
                Ok(Self::zeros_unchecked(rows, columns))
            }
        }
    }

    /// An `n x n` matrix holding a copy of `data`, zero-filled on mismatch.
    pub fn square_with_data<R: AsRef<[f64]>>(n: usize, data: &[R]) -> Result<Self> {
        Self::with_data(n, n, data)
    }

    /// A matrix whose shape is inferred from `data` (`data.len() x data[0].len()`).
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(data: &[R]) -> Result<Self> {
        let (rows, cols, data) = flatten_rows(data).ok_or(MatrixError::InvalidArguments)?;
        Ok(Self { data, rows, cols })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        fail_if(
            rows == 0 || cols == 0 || data.len() != rows * cols,
            MatrixError::InvalidArguments,
        )?;
        Ok(Self { data, rows, cols })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::square(n)?;
        for i in 0..n {
            m[(i, i)] = f64::one();
        }
        Ok(m)
    }
}

// ---------------------------------------------------------------------------
// Accessors and mutators
// ---------------------------------------------------------------------------

impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy of the elements as nested rows.
    pub fn data(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Borrow one row. Panics if `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Copy of one column. Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.cols, "column index out of bounds");
        self.iter_rows().map(|row| row[col]).collect()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        fail_if(
            row >= self.rows || col >= self.cols,
            MatrixError::IndexOutOfRange,
        )
    }

    pub fn at(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self[(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        self[(row, col)] = value;
        Ok(())
    }

    /// Zero every element, keeping the shape.
    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|v| *v = f64::zero());
    }

    /// Replace the elements with a copy of `data`.
    ///
    /// Unless `override_shape` is set, `data` must have the current shape.
    /// With it, the matrix takes on the shape of `data`.
    pub fn set_data<R: AsRef<[f64]>>(&mut self, data: &[R], override_shape: bool) -> Result<()> {
        let (rows, cols, data) =
            flatten_rows(data).ok_or(MatrixError::DimensionMismatch(Operation::Other))?;
        if !override_shape {
            fail_if(
                rows != self.rows || cols != self.cols,
                MatrixError::DimensionMismatch(Operation::Other),
            )?;
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
        Ok(())
    }

    /// Reinitialise as a zero matrix of the given `[rows, columns]`.
    ///
    /// Existing values are discarded, not cropped.
    pub fn set_shape(&mut self, shape: &[usize]) -> Result<()> {
        match *shape {
            [rows, cols] if rows > 0 && cols > 0 => {
                *self = Self::zeros_unchecked(rows, cols);
                Ok(())
            }
            _ => Err(MatrixError::ShapeMismatch),
        }
    }

    pub fn set_as_identity(&mut self) -> Result<()> {
        fail_if(!self.is_square(), MatrixError::NonSquareMatrix)?;
        let n = self.rows;
        for (idx, v) in self.data.iter_mut().enumerate() {
            *v = if idx / n == idx % n { f64::one() } else { f64::zero() };
        }
        Ok(())
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Element-wise combination of two matrices of the same shape.
    pub(crate) fn zip_with<F>(&self, other: &Matrix, mut f: F) -> Matrix
    where
        F: FnMut(f64, f64) -> f64,
    {
        debug_assert!(self.is_same_order(other));
        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

// ---------------------------------------------------------------------------
// Structural predicates
// ---------------------------------------------------------------------------

impl Matrix {
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.equals(&self.transpose())
    }

    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows;
        self.data.iter().enumerate().all(|(idx, &v)| {
            if idx / n == idx % n {
                v == 1.0
            } else {
                v == 0.0
            }
        })
    }

    /// Same number of rows and columns; values are not compared.
    pub fn is_same_order(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn equals(&self, other: &Matrix) -> bool {
        self == other
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.0 < self.rows && index.1 < self.cols, "matrix index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.0 < self.rows && index.1 < self.cols, "matrix index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.iter_rows().enumerate() {
            write!(f, "[")?;
            for (c, value) in row.iter().enumerate() {
                write!(f, "{}", value)?;
                if c + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if r + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
