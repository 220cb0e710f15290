//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Every failure is reported synchronously at the call that violates a
/// precondition; nothing is retried or logged internally.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrizError {
    /// Construction was given no rows, an empty row, or zero dimensions.
    EmptyMatrix,

    /// Construction was given rows of differing lengths.
    JaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Flat construction data does not fill rows * cols cells.
    DataLengthMismatch {
        /// rows * cols
        expected: usize,
        /// Length of the provided data
        actual: usize,
    },

    /// Matrix dimensions don't match for an elementwise operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Inner dimensions don't match for matrix multiplication.
    InnerDimensionMismatch {
        /// Column count of the left operand
        left_cols: usize,
        /// Row count of the right operand
        right_rows: usize,
    },

    /// A square matrix was required (determinant, inverse, zeroth power).
    NotSquare {
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value
        det: f64,
    },

    /// Exponentiation was given a non-integer power.
    NonIntegerPower {
        /// The offending exponent
        power: f64,
    },

    /// Scalar division by zero.
    DivisionByZero,

    /// Wrong operand kind passed to an operation.
    UnsupportedOperand {
        /// Operation name
        operation: &'static str,
        /// What the caller should use instead
        hint: &'static str,
    },

    /// A modulo argument was supplied to exponentiation.
    ModuloUnsupported,
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::EmptyMatrix => {
                write!(f, "matrix cannot be empty")
            }
            MatrizError::JaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "all rows must be the same length: row {row} has {actual} columns, expected {expected}"
                )
            }
            MatrizError::DataLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "data length must equal rows * cols: expected {expected}, got {actual}"
                )
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::InnerDimensionMismatch {
                left_cols,
                right_rows,
            } => {
                write!(
                    f,
                    "inner dimensions must match: left operand has {left_cols} columns, right operand has {right_rows} rows"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got {rows}x{cols}")
            }
            MatrizError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            MatrizError::NonIntegerPower { power } => {
                write!(f, "power supports only integer exponents, got {power}")
            }
            MatrizError::DivisionByZero => {
                write!(f, "division by zero scalar")
            }
            MatrizError::UnsupportedOperand { operation, hint } => {
                write!(f, "unsupported operand for {operation}: {hint}")
            }
            MatrizError::ModuloUnsupported => {
                write!(f, "modulo is not supported for matrix exponentiation")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a not-square error from a shape.
    #[must_use]
    pub fn not_square(shape: (usize, usize)) -> Self {
        Self::NotSquare {
            rows: shape.0,
            cols: shape.1,
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matrix_display() {
        let err = MatrizError::EmptyMatrix;
        assert_eq!(err.to_string(), "matrix cannot be empty");
    }

    #[test]
    fn test_jagged_rows_display() {
        let err = MatrizError::JaggedRows {
            row: 2,
            expected: 3,
            actual: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("same length"));
        assert!(msg.contains("row 2"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_data_length_mismatch_display() {
        let err = MatrizError::DataLengthMismatch {
            expected: 6,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 6"));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "2x2".to_string(),
            actual: "3x2".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x2"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_inner_dimension_mismatch_display() {
        let err = MatrizError::InnerDimensionMismatch {
            left_cols: 3,
            right_rows: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("inner dimensions must match"));
        assert!(msg.contains("3 columns"));
        assert!(msg.contains("2 rows"));
    }

    #[test]
    fn test_not_square_display() {
        let err = MatrizError::NotSquare { rows: 2, cols: 3 };
        assert!(err.to_string().contains("square matrix"));
        assert!(err.to_string().contains("2x3"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = MatrizError::SingularMatrix { det: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("Singular matrix"));
        assert!(msg.contains("determinant = 0"));
    }

    #[test]
    fn test_non_integer_power_display() {
        let err = MatrizError::NonIntegerPower { power: 0.5 };
        assert!(err.to_string().contains("integer exponents"));
        assert!(err.to_string().contains("0.5"));
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = MatrizError::DivisionByZero;
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn test_unsupported_operand_display() {
        let err = MatrizError::UnsupportedOperand {
            operation: "mul",
            hint: "matrix-matrix multiplication uses matmul",
        };
        let msg = err.to_string();
        assert!(msg.contains("unsupported operand for mul"));
        assert!(msg.contains("matmul"));
    }

    #[test]
    fn test_modulo_unsupported_display() {
        let err = MatrizError::ModuloUnsupported;
        assert!(err.to_string().contains("modulo is not supported"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = MatrizError::dimension_mismatch((2, 2), (3, 2));
        assert_eq!(
            err,
            MatrizError::DimensionMismatch {
                expected: "2x2".to_string(),
                actual: "3x2".to_string(),
            }
        );
    }

    #[test]
    fn test_not_square_helper() {
        let err = MatrizError::not_square((4, 1));
        assert_eq!(err, MatrizError::NotSquare { rows: 4, cols: 1 });
    }

    #[test]
    fn test_error_eq_str() {
        let err = MatrizError::EmptyMatrix;
        assert!(err == "matrix cannot be empty");
        assert!("matrix cannot be empty" == err);
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = MatrizError::DivisionByZero;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MatrizError::ModuloUnsupported;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("ModuloUnsupported"));
    }
}
