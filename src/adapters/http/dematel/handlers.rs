//! HTTP handlers for DEMATEL endpoints.
//!
//! These handlers connect Axum routes to the analysis command handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::info;

use crate::application::handlers::RunDematelHandler;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{AnalyzeRequest, CrispAnalyzeRequest, ErrorResponse, TermsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// DEMATEL API error that implements IntoResponse.
#[derive(Debug)]
pub enum DematelApiError {
    /// Body could not be parsed as the expected JSON.
    MalformedBody(String),
    /// Analysis rejected the submission or failed numerically.
    Domain { error: DomainError, verbose: bool },
}

impl DematelApiError {
    fn domain(error: impl Into<DomainError>, verbose: bool) -> Self {
        DematelApiError::Domain {
            error: error.into(),
            verbose,
        }
    }
}

/// Maps an error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MatrixTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        c if c.is_input_error() => StatusCode::BAD_REQUEST,
        c if c.is_numeric_error() => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for DematelApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DematelApiError::MalformedBody(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DematelApiError::Domain { error, verbose } => {
                let status = status_for(error.code);
                let body = if status == StatusCode::INTERNAL_SERVER_ERROR && !verbose {
                    ErrorResponse::internal("Analysis failed")
                } else {
                    ErrorResponse::from_domain(&error, verbose)
                };
                (status, body)
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for DematelApiError {
    fn from(rejection: JsonRejection) -> Self {
        DematelApiError::MalformedBody(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing DEMATEL dependencies.
#[derive(Clone)]
pub struct DematelAppState {
    pub handler: RunDematelHandler,
    /// Include error details in responses.
    pub verbose_errors: bool,
}

impl DematelAppState {
    pub fn new(handler: RunDematelHandler, verbose_errors: bool) -> Self {
        Self {
            handler,
            verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/dematel
pub async fn analyze(
    State(state): State<DematelAppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DematelApiError> {
    let Json(request) = payload?;
    let verbose = state.verbose_errors;

    let command = request
        .into_command()
        .map_err(|e| DematelApiError::domain(e, verbose))?;
    let order = command.matrix.alternative_count();

    let result = state
        .handler
        .handle(command)
        .await
        .map_err(|e| DematelApiError::domain(e, verbose))?;

    info!(order, "DEMATEL analysis served");
    Ok((StatusCode::OK, Json(result)))
}

/// POST /api/dematel/crisp
pub async fn analyze_crisp(
    State(state): State<DematelAppState>,
    payload: Result<Json<CrispAnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DematelApiError> {
    let Json(request) = payload?;
    let verbose = state.verbose_errors;
    let order = request.matrix.len();

    let result = state
        .handler
        .handle_crisp(request.into())
        .await
        .map_err(|e| DematelApiError::domain(e, verbose))?;

    info!(order, "crisp DEMATEL analysis served");
    Ok((StatusCode::OK, Json(result)))
}

/// GET /api/dematel/terms
pub async fn list_terms() -> impl IntoResponse {
    Json(TermsResponse::from_codebook())
}
