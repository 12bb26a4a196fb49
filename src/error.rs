use std::error::Error;
use std::fmt;

/// The operation a dimension or determinant error was raised from.
///
/// Only used to pick the message wording; the error kind itself is carried by
/// [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Multiplication,
    Addition,
    Subtraction,
    Inverse,
    Other,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Multiplication => "multiplication",
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Inverse => "inverse",
            Operation::Other => "",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for every fallible matrix operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    InvalidArguments,
    DimensionMismatch(Operation),
    NonSquareMatrix,
    ShapeMismatch,
    ZeroDeterminant(Operation),
    InvalidRotateAngle,
    IndexOutOfRange,
}

pub type Result<T> = std::result::Result<T, MatrixError>;

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidArguments => write!(f, "Invalid arguments provided"),
            MatrixError::DimensionMismatch(Operation::Multiplication) => write!(
                f,
                "Matrix dimension mismatch: The number of columns in the first matrix must be equal to the number of rows"
            ),
            MatrixError::DimensionMismatch(Operation::Addition | Operation::Subtraction) => write!(
                f,
                "Matrix dimension mismatch: The matrices must have the same dimensions (n x m)."
            ),
            MatrixError::DimensionMismatch(_) => write!(
                f,
                "Matrix dimensions mismatch: The matrices must have compatible dimensions for this operation."
            ),
            MatrixError::NonSquareMatrix => {
                write!(f, "Non-square matrix: The operation requires a square matrix.")
            }
            MatrixError::ShapeMismatch => write!(
                f,
                "Matrix shape mismatch: The dimensions of the matrices are incompatible."
            ),
            MatrixError::ZeroDeterminant(op) => write!(
                f,
                "Zero determinant: The matrix has a determinant of zero, and therefore does not have an {}.",
                op
            ),
            MatrixError::InvalidRotateAngle => write!(
                f,
                "Invalid rotate angle: The angle required to be a multiples of 90 degrees."
            ),
            MatrixError::IndexOutOfRange => {
                write!(f, "Index out of range: The indexes provided are out of range.")
            }
        }
    }
}

impl Error for MatrixError {}

/// Returns `Err(error)` when `condition` holds.
///
/// ```
/// use dense_matrix::error::{fail_if, MatrixError};
///
/// assert!(fail_if(false, MatrixError::ShapeMismatch).is_ok());
/// assert_eq!(
///     fail_if(true, MatrixError::ShapeMismatch),
///     Err(MatrixError::ShapeMismatch)
/// );
/// ```
#[inline]
pub fn fail_if(condition: bool, error: MatrixError) -> Result<()> {
    if condition {
        Err(error)
    } else {
        Ok(())
    }
}
