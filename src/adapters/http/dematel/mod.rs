//! HTTP adapter for DEMATEL analysis.
//!
//! # Endpoints
//!
//! - `POST /api/dematel` - Analyze a linguistic-term matrix
//! - `POST /api/dematel/crisp` - Analyze a matrix of crisp values
//! - `GET /api/dematel/terms` - List the linguistic codebook

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    AnalyzeRequest, CrispAnalyzeRequest, ErrorResponse, HealthResponse, TermView, TermsResponse,
};
pub use handlers::{status_for, DematelApiError, DematelAppState};
pub use routes::dematel_routes;
