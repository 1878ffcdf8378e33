//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `app` assembles them behind the shared middleware stack.

pub mod app;
pub mod dematel;

// Re-export key types for convenience
pub use app::build_app;
pub use dematel::{dematel_routes, DematelAppState};
