use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::math::Matrix;

/// Description of a matrix to build, e.g. from a JSON file.
///
/// Which fields are present decides the constructor:
///
/// | rows | columns | data | result |
/// |------|---------|------|--------|
/// | -    | -       | -    | 1x1 zero matrix |
/// | n    | -       | -    | n x n zeros |
/// | r    | c       | -    | r x c zeros |
/// | r    | c       | d    | r x c from `d`, zeros if `d` has another shape |
/// | n    | -       | d    | n x n from `d`, zeros if `d` has another shape |
/// | -    | -       | d    | shape taken from `d` |
///
/// Anything else (a lone `columns`, say) is `InvalidArguments`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub data: Option<Vec<Vec<f64>>>,
}

impl MatrixConfig {
    pub fn new(rows: Option<usize>, columns: Option<usize>, data: Option<Vec<Vec<f64>>>) -> Self {
        Self { rows, columns, data }
    }

    pub fn build(&self) -> Result<Matrix, MatrixError> {
        match (self.rows, self.columns, self.data.as_deref()) {
            (None, None, None) => Ok(Matrix::new()),
            (Some(n), None, None) => Matrix::square(n),
            (Some(r), Some(c), None) => Matrix::zeros(r, c),
            (Some(r), Some(c), Some(data)) => Matrix::with_data(r, c, data),
            (Some(n), None, Some(data)) => Matrix::square_with_data(n, data),
            (None, None, Some(data)) => Matrix::from_rows(data),
            _ => Err(MatrixError::InvalidArguments),
        }
    }
}

impl FromStr for MatrixConfig {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<&Matrix> for MatrixConfig {
    fn from(matrix: &Matrix) -> Self {
        Self {
            rows: Some(matrix.rows()),
            columns: Some(matrix.columns()),
            data: Some(matrix.data()),
        }
    }
}

/// Load a matrix description from a JSON file.
pub fn load_matrix_config<P: AsRef<Path>>(path: P) -> Result<MatrixConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: MatrixConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load a matrix description from a JSON file and build it.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let config = load_matrix_config(&path)?;
    let matrix = config
        .build()
        .with_context(|| format!("Invalid matrix in config: {}", path.as_ref().display()))?;
    log::info!(
        "Loaded {}x{} matrix from {}",
        matrix.rows(),
        matrix.columns(),
        path.as_ref().display()
    );
    Ok(matrix)
}
