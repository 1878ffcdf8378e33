//! HTTP routes for DEMATEL endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{analyze, analyze_crisp, list_terms, DematelAppState};

/// Creates the DEMATEL router with all routes.
pub fn dematel_routes(state: DematelAppState) -> Router {
    Router::new()
        // POST /api/dematel
        .route("/api/dematel", post(analyze))
        // POST /api/dematel/crisp
        .route("/api/dematel/crisp", post(analyze_crisp))
        // GET /api/dematel/terms
        .route("/api/dematel/terms", get(list_terms))
        .with_state(state)
}
