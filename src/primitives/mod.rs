//! Core value types (Matrix, Scalar).
//!
//! Everything here is immutable after construction; operations return
//! freshly allocated results, so values can be shared freely.

mod matrix;
mod scalar;

pub use matrix::{Matrix, Operand};
pub use scalar::Scalar;
