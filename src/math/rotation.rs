use std::f64::consts::PI;

use crate::error::{fail_if, MatrixError, Result};
use crate::math::matrix::Matrix;

/// Rotate nested rows a quarter turn clockwise.
///
/// An `R x C` input becomes `C x R` with `result[i][j] = source[R - 1 - j][i]`.
///
/// ```
/// use dense_matrix::math::rotate_90_clockwise;
///
/// let rotated = rotate_90_clockwise(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert_eq!(rotated, vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
/// ```
pub fn rotate_90_clockwise<R: AsRef<[f64]>>(source: &[R]) -> Vec<Vec<f64>> {
    let cols = source.first().map_or(0, |row| row.as_ref().len());
    (0..cols)
        .map(|i| source.iter().rev().map(|row| row.as_ref()[i]).collect())
        .collect()
}

impl Matrix {
    /// Rotate by a multiple of 90 degrees, clockwise for positive angles.
    ///
    /// Angles with `|angle| <= PI` are read as radians, anything larger as
    /// degrees. The result of an odd number of quarter turns has the
    /// transposed shape.
    pub fn rotate(&self, angle: f64) -> Result<Matrix> {
        let degrees = if angle.abs() <= PI {
            angle.to_degrees()
        } else {
            angle
        };
        fail_if(degrees % 90.0 != 0.0, MatrixError::InvalidRotateAngle)?;
        let turns = (((degrees % 360.0) + 360.0) % 360.0 / 90.0) as usize;
        log::trace!("rotate by {} degrees ({} quarter turns)", degrees, turns);

        let mut rows = self.data();
        for _ in 0..turns {
            rows = rotate_90_clockwise(&rows);
        }
        Matrix::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_of_column_vector() {
        let rotated = rotate_90_clockwise(&[[1.0], [2.0], [3.0]]);
        assert_eq!(rotated, vec![vec![3.0, 2.0, 1.0]]);
    }

    #[test]
    fn empty_source_rotates_to_empty() {
        assert!(rotate_90_clockwise::<Vec<f64>>(&[]).is_empty());
    }
}
