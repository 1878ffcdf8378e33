//! Application layer - Commands and Handlers.
//!
//! This layer turns transport-neutral commands into domain calls and maps
//! domain failures onto [`DomainError`](crate::domain::foundation::DomainError).

pub mod handlers;

pub use handlers::{RunCrispDematelCommand, RunDematelCommand, RunDematelHandler};
