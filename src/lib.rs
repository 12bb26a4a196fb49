//! dense-matrix: a small dense `f64` matrix type.
//!
//! [`Matrix`] covers construction, checked element access, arithmetic,
//! structural predicates and the classical textbook operations (cofactor
//! determinant, adjugate inverse, trace, transpose, quarter-turn rotation).
//!
//! Everything fallible returns [`error::Result`]; the messages match the
//! catalogue in [`error::MatrixError`]. Matrices can also be described in JSON
//! through [`config::MatrixConfig`].
pub mod config;
pub mod error;
pub mod math;
pub mod utils;

pub use error::{MatrixError, Operation};
pub use math::{Matrix, Multiplier};
