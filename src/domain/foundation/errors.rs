//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    IncompleteInput,
    ShapeMismatch,
    NonSquareMatrix,
    InvalidTerm,
    InvalidCrispValue,

    // Resource limits
    MatrixTooLarge,

    // Numeric errors
    DegenerateScale,
    MatrixInversionFailed,

    // Infrastructure errors
    InternalError,
}

impl ErrorCode {
    /// Returns true for errors caused by the submitted input shape or content.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::IncompleteInput
                | ErrorCode::ShapeMismatch
                | ErrorCode::NonSquareMatrix
                | ErrorCode::InvalidTerm
                | ErrorCode::InvalidCrispValue
        )
    }

    /// Returns true for failures raised by the numeric pipeline itself.
    pub fn is_numeric_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::DegenerateScale | ErrorCode::MatrixInversionFailed
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::IncompleteInput => "INCOMPLETE_INPUT",
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::NonSquareMatrix => "NON_SQUARE_MATRIX",
            ErrorCode::InvalidTerm => "INVALID_TERM",
            ErrorCode::InvalidCrispValue => "INVALID_CRISP_VALUE",
            ErrorCode::MatrixTooLarge => "MATRIX_TOO_LARGE",
            ErrorCode::DegenerateScale => "DEGENERATE_SCALE",
            ErrorCode::MatrixInversionFailed => "MATRIX_INVERSION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
