//! Normalizer - Scales the crisp matrix by its largest row sum.

use rust_decimal::Decimal;

use super::matrix::DecimalMatrix;
use super::{CrispMatrix, DematelError};

/// Output of normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    /// Crisp matrix multiplied by `scale`.
    pub matrix: DecimalMatrix,
    /// Scale factor `k = 1 / max_row_sum`.
    pub scale: Decimal,
    /// Largest row sum of the crisp matrix.
    pub max_row_sum: Decimal,
}

/// Row-sum normalization.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a crisp matrix so that every row sum is at most one.
    ///
    /// # Algorithm
    /// `k = 1 / max_i(Σ_j crisp[i][j])`, then every cell is multiplied by `k`.
    ///
    /// # Errors
    /// - `InvalidTerms` if the crisp matrix still contains undefined cells
    /// - `DegenerateScale` if the matrix has no rows or every row sums to zero
    pub fn normalize(crisp: &CrispMatrix) -> Result<Normalization, DematelError> {
        let matrix = crisp.to_decimal_matrix()?;
        Self::normalize_matrix(&matrix)
    }

    /// Normalizes an already-decoded matrix.
    pub fn normalize_matrix(matrix: &DecimalMatrix) -> Result<Normalization, DematelError> {
        if matrix.nrows() == 0 {
            return Err(DematelError::degenerate_scale("the matrix has no rows"));
        }

        let max_row_sum = matrix
            .row_sums()?
            .into_iter()
            .fold(Decimal::ZERO, Decimal::max);

        if max_row_sum.is_zero() {
            return Err(DematelError::degenerate_scale(
                "every crisp value is zero, so the largest row sum is zero",
            ));
        }

        let scale = Decimal::ONE
            .checked_div(max_row_sum)
            .ok_or_else(|| DematelError::degenerate_scale("scale factor is not representable"))?;

        Ok(Normalization {
            matrix: matrix.scale(scale)?,
            scale,
            max_row_sum,
        })
    }
}
