//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by every domain module and the
//! transport layers above it.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
