//! The dense [`Matrix`] type and everything that operates on it.
//!
//! Construction, accessors and predicates live in `matrix`; arithmetic in
//! `ops`; determinant, inverse and friends in `linalg`; quarter-turn rotation
//! in `rotation`; `ndarray` conversions in `interop`.
pub mod interop;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod rotation;

pub use matrix::Matrix;
pub use ops::Multiplier;
pub use rotation::rotate_90_clockwise;
