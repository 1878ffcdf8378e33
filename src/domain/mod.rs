//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (validation and domain errors)
//! - `dematel` - Pure DEMATEL pipeline (codebook, matrices, ranking)

pub mod dematel;
pub mod foundation;
