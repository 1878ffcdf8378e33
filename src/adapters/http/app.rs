//! Application router - DEMATEL routes plus health check and middleware.

use std::sync::Arc;

use axum::extract::Json;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::handlers::RunDematelHandler;
use crate::config::{AppConfig, CorsPolicy, ValidationError};
use crate::domain::dematel::DematelAnalyzer;

use super::dematel::{dematel_routes, DematelAppState, HealthResponse};

/// Builds the full HTTP application from configuration.
///
/// # Errors
///
/// Returns `ValidationError` if the analysis section is invalid.
pub fn build_app(config: &AppConfig) -> Result<Router, ValidationError> {
    let options = config.analysis.to_options()?;
    let handler = RunDematelHandler::new(Arc::new(DematelAnalyzer::new(options)));
    let state = DematelAppState::new(handler, config.features.verbose_errors);

    let mut app = Router::new()
        .route("/health", get(health))
        .merge(dematel_routes(state))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(config));

    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    // Outermost: assign an id before tracing, echo it on the response.
    Ok(app
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}

/// GET /health
async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match config.server.cors_policy() {
        CorsPolicy::SameOrigin => base,
        CorsPolicy::AnyOrigin => base.allow_origin(Any),
        CorsPolicy::Origins(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            base.allow_origin(AllowOrigin::list(origins))
        }
    }
}
