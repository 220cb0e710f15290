//! Matrix type for dense real arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Scalar;
use crate::error::{MatrizError, Result};

/// Right-hand operand accepted by the dispatching [`Matrix::mul`] and
/// [`Matrix::div`] entry points.
///
/// Scalar and matrix operands follow different shape rules, so the
/// distinction is a closed variant rather than a runtime type check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// A matrix operand.
    Matrix(Matrix),
    /// A scalar operand.
    Scalar(Scalar),
}

impl From<Matrix> for Operand {
    fn from(m: Matrix) -> Self {
        Operand::Matrix(m)
    }
}

impl From<Scalar> for Operand {
    fn from(s: Scalar) -> Self {
        Operand::Scalar(s)
    }
}

/// A 2D matrix of `f64` values (row-major storage).
///
/// Matrices are value types: every operation returns a freshly allocated
/// result and never mutates its operands. Construction validates that the
/// grid is non-empty and rectangular; those invariants hold for the lifetime
/// of the value.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
/// ]).expect("rows are rectangular");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty, or the
    /// rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(MatrizError::EmptyMatrix);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(MatrizError::EmptyMatrix);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrizError::JaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }
        let row_count = rows.len();
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: row_count,
            cols,
        })
    }

    /// Creates a matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or data length doesn't
    /// equal rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(MatrizError::DataLengthMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates the n-by-n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[f64] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a column as a freshly collected vector.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<f64> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }

    // Elementwise primitive behind add and sub. Scalar multiply/divide use
    // the same cell-by-cell walk with the scalar broadcast to every cell.
    fn combine<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a - b)
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if the left column count doesn't equal the right
    /// row count.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::InnerDimensionMismatch {
                left_cols: self.cols,
                right_rows: other.rows,
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Multiplies each element by a scalar.
    ///
    /// Commutes with [`Scalar::mul_matrix`]: both orders produce the same
    /// result.
    #[must_use]
    pub fn mul_scalar(&self, scalar: Scalar) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar.value()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Divides each element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns an error if the scalar is zero.
    pub fn div_scalar(&self, scalar: Scalar) -> Result<Self> {
        if scalar.value() == 0.0 {
            return Err(MatrizError::DivisionByZero);
        }
        Ok(Self {
            data: self.data.iter().map(|x| x / scalar.value()).collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies by an operand.
    ///
    /// Only scalar operands are accepted here; a matrix operand is rejected
    /// with a hint to use [`Matrix::matmul`], which follows different shape
    /// rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand is a matrix.
    pub fn mul(&self, rhs: &Operand) -> Result<Self> {
        match rhs {
            Operand::Scalar(s) => Ok(self.mul_scalar(*s)),
            Operand::Matrix(_) => Err(MatrizError::UnsupportedOperand {
                operation: "mul",
                hint: "matrix-matrix multiplication uses matmul",
            }),
        }
    }

    /// Divides by an operand.
    ///
    /// Division by a scalar divides each element; division by a matrix
    /// multiplies by its inverse.
    ///
    /// # Errors
    ///
    /// Returns an error if the scalar is zero, or if a matrix divisor is
    /// not square or is singular.
    pub fn div(&self, rhs: &Operand) -> Result<Self> {
        match rhs {
            Operand::Scalar(s) => self.div_scalar(*s),
            Operand::Matrix(b) => self.matmul(&b.inverse()?),
        }
    }

    // Submatrix with one row and one column deleted.
    fn minor(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.get(i, j));
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Computes the determinant by cofactor expansion along the first
    /// column.
    ///
    /// Exponential in the matrix size; intended for the small matrices this
    /// crate targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn determinant(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrizError::not_square(self.shape()));
        }
        match self.rows {
            // Empty minor of a 1x1 matrix during inversion.
            0 => Ok(1.0),
            1 => Ok(self.get(0, 0)),
            n => {
                let mut det = 0.0;
                for i in 0..n {
                    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * self.get(i, 0) * self.minor(i, 0).determinant()?;
                }
                Ok(det)
            }
        }
    }

    /// Computes the inverse via the adjugate.
    ///
    /// The entry at (i, j) is the cofactor of (j, i) — the transposed
    /// indexing builds the adjugate directly, so no separate transpose pass
    /// is needed. The adjugate is then divided by the determinant.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or its determinant is
    /// zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(MatrizError::not_square(self.shape()));
        }
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrizError::SingularMatrix { det });
        }

        let n = self.rows;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                data.push(sign * self.minor(j, i).determinant()?);
            }
        }
        let adjugate = Self {
            data,
            rows: n,
            cols: n,
        };
        adjugate.div_scalar(Scalar::new(det))
    }

    /// Raises the matrix to an integer power.
    ///
    /// The zeroth power of a square matrix is the identity; negative powers
    /// raise the inverse to the corresponding positive power.
    ///
    /// # Errors
    ///
    /// Returns an error if the exponent is not an integer, if the zeroth
    /// power is requested on a non-square matrix, or if a negative power is
    /// requested on a non-invertible matrix.
    pub fn power(&self, exp: Scalar) -> Result<Self> {
        self.power_mod(exp, None)
    }

    /// Raises the matrix to an integer power, with an explicit modulo slot.
    ///
    /// Modular exponentiation is not implemented; supplying a modulo is
    /// rejected outright.
    ///
    /// # Errors
    ///
    /// As [`Matrix::power`], plus an error when `modulo` is `Some`.
    pub fn power_mod(&self, exp: Scalar, modulo: Option<f64>) -> Result<Self> {
        if modulo.is_some() {
            return Err(MatrizError::ModuloUnsupported);
        }
        if !exp.is_integer() {
            return Err(MatrizError::NonIntegerPower { power: exp.value() });
        }

        let p = exp.value();
        if p == 0.0 {
            if self.rows != self.cols {
                return Err(MatrizError::not_square(self.shape()));
            }
            return Ok(Self::identity(self.rows));
        }
        if p == 1.0 {
            return Ok(self.clone());
        }
        if p < 0.0 {
            return self.inverse()?.power(Scalar::new(-p));
        }
        // p >= 2: right-multiply one factor at a time.
        self.power(Scalar::new(p - 1.0))?.matmul(self)
    }
}

/// Renders the matrix as space-separated values, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
