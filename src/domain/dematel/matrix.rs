//! Dense decimal matrix used through the subtract → invert → multiply chain.
//!
//! All arithmetic is checked: an overflow of the 96-bit decimal mantissa is
//! reported as [`MatrixError::Overflow`] instead of panicking.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error raised by matrix construction or arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operation requires a square matrix.
    #[error("matrix must be square but had shape {rows}×{cols}")]
    NonSquare { rows: usize, cols: usize },

    /// Operand shapes are incompatible.
    #[error("incompatible shapes {left_rows}×{left_cols} and {right_rows}×{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Rows passed to the constructor had different lengths.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Elimination found no usable pivot in a column.
    #[error("matrix is singular or nearly singular (pivot {pivot} in column {column})")]
    Singular { column: usize, pivot: Decimal },

    /// An intermediate value left the representable decimal range.
    #[error("decimal overflow during matrix arithmetic")]
    Overflow,
}

fn checked(value: Option<Decimal>) -> Result<Decimal, MatrixError> {
    value.ok_or(MatrixError::Overflow)
}

/// Row-major matrix of [`Decimal`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Decimal>,
}

impl DecimalMatrix {
    /// Creates a `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Decimal::ZERO; rows * cols],
        }
    }

    /// Creates the identity matrix of order `n`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, Decimal::ONE);
        }
        m
    }

    /// Builds a matrix from rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Decimal>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at `(i, j)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Decimal {
        self.data[i * self.cols + j]
    }

    /// Sets the entry at `(i, j)`.
    ///
    /// # Panics
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, i: usize, j: usize, value: Decimal) {
        self.data[i * self.cols + j] = value;
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[Decimal] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Returns true if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| v.is_zero())
    }

    /// Sum of each row.
    pub fn row_sums(&self) -> Result<Vec<Decimal>, MatrixError> {
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .try_fold(Decimal::ZERO, |acc, v| checked(acc.checked_add(*v)))
            })
            .collect()
    }

    /// Sum of each column.
    pub fn col_sums(&self) -> Result<Vec<Decimal>, MatrixError> {
        (0..self.cols)
            .map(|j| {
                (0..self.rows).try_fold(Decimal::ZERO, |acc, i| {
                    checked(acc.checked_add(self.get(i, j)))
                })
            })
            .collect()
    }

    /// Multiplies every entry by `factor`.
    pub fn scale(&self, factor: Decimal) -> Result<Self, MatrixError> {
        let data = self
            .data
            .iter()
            .map(|v| checked(v.checked_mul(factor)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Element-wise `self − other`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.shape_mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| checked(a.checked_sub(*b)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Standard `O(n³)` product `self · other`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(self.shape_mismatch(other));
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Decimal::ZERO;
                for k in 0..self.cols {
                    let term = checked(self.get(i, k).checked_mul(other.get(k, j)))?;
                    sum = checked(sum.checked_add(term))?;
                }
                out.set(i, j, sum);
            }
        }
        Ok(out)
    }

    /// Inverts the matrix by Gauss–Jordan elimination with partial pivoting.
    ///
    /// A pivot whose magnitude is at most `tolerance` marks the matrix as
    /// singular.
    pub fn try_inverse(&self, tolerance: Decimal) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NonSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let mut work = self.clone();
        let mut inverse = Self::identity(n);

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by_key(|&r| work.get(r, col).abs())
                .unwrap_or(col);
            let pivot = work.get(pivot_row, col);
            if pivot.abs() <= tolerance {
                return Err(MatrixError::Singular { column: col, pivot });
            }

            work.swap_rows(pivot_row, col);
            inverse.swap_rows(pivot_row, col);

            for j in 0..n {
                work.set(col, j, checked(work.get(col, j).checked_div(pivot))?);
                inverse.set(col, j, checked(inverse.get(col, j).checked_div(pivot))?);
            }

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = work.get(r, col);
                if factor.is_zero() {
                    continue;
                }
                for j in 0..n {
                    let w = checked(factor.checked_mul(work.get(col, j)))?;
                    work.set(r, j, checked(work.get(r, j).checked_sub(w))?);
                    let v = checked(factor.checked_mul(inverse.get(col, j)))?;
                    inverse.set(r, j, checked(inverse.get(r, j).checked_sub(v))?);
                }
            }
        }

        Ok(inverse)
    }

    /// Rounds every entry to `dp` decimal places, midpoints away from zero.
    pub fn round_dp(&self, dp: u32) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|v| v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
                .collect(),
        }
    }

    /// Returns true if every entry is within `tolerance` of the identity.
    pub fn approx_identity(&self, tolerance: Decimal) -> bool {
        if !self.is_square() {
            return false;
        }
        (0..self.rows).all(|i| {
            (0..self.cols).all(|j| {
                let expected = if i == j { Decimal::ONE } else { Decimal::ZERO };
                (self.get(i, j) - expected).abs() <= tolerance
            })
        })
    }

    /// Converts to nested `f64` rows for display.
    pub fn to_f64_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .map(|v| v.to_f64().unwrap_or(f64::NAN))
                    .collect()
            })
            .collect()
    }

    fn shape_mismatch(&self, other: &Self) -> MatrixError {
        MatrixError::ShapeMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows: other.rows,
            right_cols: other.cols,
        }
    }
}
