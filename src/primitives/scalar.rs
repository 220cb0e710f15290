//! Scalar operand type.

use serde::{Deserialize, Serialize};

use super::Matrix;

/// A single real number used as a matrix operand.
///
/// Exists to keep "scale a matrix by a number" apart from matrix-matrix
/// multiplication; the two follow different shape rules and different entry
/// points.
///
/// # Examples
///
/// ```
/// use matriz::primitives::{Matrix, Scalar};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
/// let doubled = m.mul_scalar(Scalar::new(2.0));
/// assert_eq!(doubled.get(0, 1), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scalar {
    value: f64,
}

impl Scalar {
    /// Creates a scalar from a real number.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Returns true when the value is a finite mathematical integer.
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.value.is_finite() && self.value.fract() == 0.0
    }

    /// Multiplies a matrix by this scalar from the left.
    ///
    /// Identical to [`Matrix::mul_scalar`]; scalar multiplication commutes.
    #[must_use]
    pub fn mul_matrix(self, matrix: &Matrix) -> Matrix {
        matrix.mul_scalar(self)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
