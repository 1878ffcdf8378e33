//! Total-Relation Solver - `T = X · (I − X)⁻¹` in extended precision.
//!
//! The whole chain runs on 28-digit decimals. Only the visible result is
//! rounded, to [`TOTAL_RELATION_DECIMALS`] places.

use rust_decimal::Decimal;
use tracing::debug;

use super::matrix::DecimalMatrix;
use super::DematelError;

/// Decimal places kept in the visible total-relation matrix.
pub const TOTAL_RELATION_DECIMALS: u32 = 3;

/// Default pivot magnitude below which `I − X` is treated as singular.
pub fn default_singularity_tolerance() -> Decimal {
    Decimal::new(1, 12)
}

/// Output of the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalRelation {
    /// Full-precision `T`.
    pub exact: DecimalMatrix,
    /// `T` rounded for display and aggregation.
    pub rounded: DecimalMatrix,
}

/// Total-relation computation.
pub struct TotalRelationSolver;

impl TotalRelationSolver {
    /// Computes the total-relation matrix of a normalized matrix.
    ///
    /// # Errors
    /// - `NonSquareMatrix` if `normalized` is not square
    /// - `MatrixInversionFailed` if `I − X` is singular within `tolerance` or
    ///   the arithmetic overflows
    pub fn solve(
        normalized: &DecimalMatrix,
        tolerance: Decimal,
    ) -> Result<TotalRelation, DematelError> {
        let inverse = Self::invert_complement(normalized, tolerance)?;
        let exact = normalized.checked_mul(&inverse)?;
        let rounded = exact.round_dp(TOTAL_RELATION_DECIMALS);

        debug!(order = normalized.nrows(), "total relation matrix computed");

        Ok(TotalRelation { exact, rounded })
    }

    /// Returns `(I − X)⁻¹`.
    pub fn invert_complement(
        normalized: &DecimalMatrix,
        tolerance: Decimal,
    ) -> Result<DecimalMatrix, DematelError> {
        if !normalized.is_square() {
            return Err(DematelError::NonSquareMatrix {
                alternatives: normalized.nrows(),
                criteria: normalized.ncols(),
            });
        }

        let complement = DecimalMatrix::identity(normalized.nrows()).checked_sub(normalized)?;
        Ok(complement.try_inverse(tolerance)?)
    }
}
