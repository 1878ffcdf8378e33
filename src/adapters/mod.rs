//! Adapters - Transport-facing implementations.
//!
//! - `http` - REST API over axum

pub mod http;

pub use http::build_app;
