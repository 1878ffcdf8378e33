//! Aggregator - Influence given/received, prominence and relation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::matrix::DecimalMatrix;
use super::DematelError;

/// Decimal places kept for prominence and relation.
pub const SCORE_DECIMALS: u32 = 2;

/// Per-alternative influence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceScores {
    /// `D[i]`: row sums of `T` (influence given).
    pub given: Vec<f64>,
    /// `R[j]`: column sums of `T` (influence received).
    pub received: Vec<f64>,
    /// `round(D + R, 2)`.
    pub prominence: Vec<f64>,
    /// `round(D − R, 2)`.
    pub relation: Vec<f64>,
}

/// Influence aggregation.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates a square total-relation matrix.
    ///
    /// Sums are taken at decimal precision and converted to `f64` at the end.
    pub fn aggregate(total_relation: &DecimalMatrix) -> Result<InfluenceScores, DematelError> {
        if !total_relation.is_square() {
            return Err(DematelError::NonSquareMatrix {
                alternatives: total_relation.nrows(),
                criteria: total_relation.ncols(),
            });
        }

        let d = total_relation.row_sums()?;
        let r = total_relation.col_sums()?;

        let mut prominence = Vec::with_capacity(d.len());
        let mut relation = Vec::with_capacity(d.len());
        for (given, received) in d.iter().zip(r.iter()) {
            let sum = given
                .checked_add(*received)
                .ok_or_else(|| DematelError::inversion_failed("prominence overflow"))?;
            let diff = given
                .checked_sub(*received)
                .ok_or_else(|| DematelError::inversion_failed("relation overflow"))?;
            prominence.push(round_score(sum));
            relation.push(round_score(diff));
        }

        Ok(InfluenceScores {
            given: d.iter().map(to_f64).collect(),
            received: r.iter().map(to_f64).collect(),
            prominence,
            relation,
        })
    }
}

fn to_f64(value: &Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn round_score(value: Decimal) -> f64 {
    to_f64(&value.round_dp_with_strategy(SCORE_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
}
