//! Matriz: dense matrix arithmetic over real numbers.
//!
//! Provides an immutable [`Matrix`] value type with validated construction,
//! elementwise addition/subtraction, matrix multiplication, scalar
//! multiplication/division, cofactor-expansion determinants, adjugate
//! inversion, and integer powers (negative powers via the inverse). The
//! [`Scalar`] wrapper keeps "scale a matrix by a number" apart from
//! matrix-matrix multiplication, which follows different shape rules.
//!
//! The algorithms are the straightforward recursive ones, chosen for clarity
//! over asymptotics; they target small matrices. Every operation returns a
//! freshly allocated result, so values can be shared across threads without
//! synchronization.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//! ]).unwrap();
//!
//! let inv = m.inverse().unwrap();
//! let product = m.matmul(&inv).unwrap();
//! let identity = Matrix::identity(2);
//! for i in 0..2 {
//!     for j in 0..2 {
//!         assert!((product.get(i, j) - identity.get(i, j)).abs() < 1e-9);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: core `Matrix`, `Scalar`, and `Operand` value types
//! - [`error`]: the crate error type and `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, Operand, Scalar};
