//! DEMATEL analysis errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::matrix::MatrixError;

/// An assessment cell whose token is not a codebook term.
///
/// `row` and `column` are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCell {
    pub row: usize,
    pub column: usize,
    pub token: String,
}

impl InvalidCell {
    pub fn new(row: usize, column: usize, token: impl Into<String>) -> Self {
        Self {
            row,
            column,
            token: token.into(),
        }
    }
}

fn describe_cells(cells: &[InvalidCell]) -> String {
    cells
        .iter()
        .map(|c| {
            if c.token.is_empty() {
                format!("Alt {} - Crit {} is empty", c.row + 1, c.column + 1)
            } else {
                format!("Alt {} - Crit {} = '{}'", c.row + 1, c.column + 1, c.token)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Terminal failure of one DEMATEL submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DematelError {
    #[error("Please fill out all weights, criteria, and alternatives ({reason})")]
    IncompleteInput { reason: String },

    #[error("Assessment matrix shape mismatch: {reason}")]
    ShapeMismatch { reason: String },

    #[error(
        "Assessment matrix must be square: {alternatives} alternatives but {criteria} criteria"
    )]
    NonSquareMatrix { alternatives: usize, criteria: usize },

    #[error("Assessment matrix order {order} exceeds the maximum of {max}")]
    MatrixTooLarge { order: usize, max: usize },

    #[error("Invalid linguistic values found in matrix: {}", describe_cells(.cells))]
    InvalidTerms { cells: Vec<InvalidCell> },

    #[error("Invalid crisp value at Alt {} - Crit {}: {value}", .row + 1, .column + 1)]
    InvalidCrispValue { row: usize, column: usize, value: f64 },

    #[error("Normalization is undefined: {reason}")]
    DegenerateScale { reason: String },

    #[error("Matrix inversion failed. Check for linear dependencies. ({reason})")]
    MatrixInversionFailed { reason: String },
}

impl DematelError {
    pub fn incomplete(reason: impl Into<String>) -> Self {
        DematelError::IncompleteInput {
            reason: reason.into(),
        }
    }

    pub fn shape_mismatch(reason: impl Into<String>) -> Self {
        DematelError::ShapeMismatch {
            reason: reason.into(),
        }
    }

    pub fn degenerate_scale(reason: impl Into<String>) -> Self {
        DematelError::DegenerateScale {
            reason: reason.into(),
        }
    }

    pub fn inversion_failed(reason: impl Into<String>) -> Self {
        DematelError::MatrixInversionFailed {
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            DematelError::IncompleteInput { .. } => ErrorCode::IncompleteInput,
            DematelError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            DematelError::NonSquareMatrix { .. } => ErrorCode::NonSquareMatrix,
            DematelError::MatrixTooLarge { .. } => ErrorCode::MatrixTooLarge,
            DematelError::InvalidTerms { .. } => ErrorCode::InvalidTerm,
            DematelError::InvalidCrispValue { .. } => ErrorCode::InvalidCrispValue,
            DematelError::DegenerateScale { .. } => ErrorCode::DegenerateScale,
            DematelError::MatrixInversionFailed { .. } => ErrorCode::MatrixInversionFailed,
        }
    }
}

impl From<MatrixError> for DematelError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::NonSquare { rows, cols } => DematelError::NonSquareMatrix {
                alternatives: rows,
                criteria: cols,
            },
            MatrixError::RaggedRows { .. } | MatrixError::ShapeMismatch { .. } => {
                DematelError::shape_mismatch(err.to_string())
            }
            MatrixError::Singular { .. } | MatrixError::Overflow => {
                DematelError::inversion_failed(err.to_string())
            }
        }
    }
}

impl From<DematelError> for DomainError {
    fn from(err: DematelError) -> Self {
        let mut domain = DomainError::new(err.code(), err.to_string());
        match &err {
            DematelError::NonSquareMatrix {
                alternatives,
                criteria,
            } => {
                domain = domain
                    .with_detail("alternatives", alternatives.to_string())
                    .with_detail("criteria", criteria.to_string());
            }
            DematelError::MatrixTooLarge { order, max } => {
                domain = domain
                    .with_detail("order", order.to_string())
                    .with_detail("max_order", max.to_string());
            }
            DematelError::InvalidTerms { cells } => {
                domain = domain
                    .with_detail("invalid_count", cells.len().to_string())
                    .with_detail("cells", describe_cells(cells));
            }
            DematelError::InvalidCrispValue { row, column, .. } => {
                domain = domain
                    .with_detail("row", row.to_string())
                    .with_detail("column", column.to_string());
            }
            _ => {}
        }
        domain
    }
}
