//! Data transfer objects for DEMATEL endpoints.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::application::handlers::{RunCrispDematelCommand, RunDematelCommand};
use crate::domain::dematel::{AssessmentMatrix, Codebook, DematelError};
use crate::domain::foundation::DomainError;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/dematel`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    /// One entry per criterion; `null` marks a weight that was not filled in.
    #[serde(default)]
    pub weights: Vec<Option<f64>>,
    /// Linguistic term symbols, one row per alternative.
    pub matrix: Vec<Vec<String>>,
}

impl AnalyzeRequest {
    pub fn into_command(self) -> Result<RunDematelCommand, DematelError> {
        Ok(RunDematelCommand {
            matrix: AssessmentMatrix::try_from_rows(&self.matrix)?,
            criteria: self.criteria,
            alternatives: self.alternatives,
            weights: self.weights,
        })
    }
}

/// Request body for `POST /api/dematel/crisp`.
#[derive(Debug, Clone, Deserialize)]
pub struct CrispAnalyzeRequest {
    pub criteria: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

impl From<CrispAnalyzeRequest> for RunCrispDematelCommand {
    fn from(req: CrispAnalyzeRequest) -> Self {
        Self {
            criteria: req.criteria,
            alternatives: req.alternatives,
            matrix: req.matrix,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

// Successful analyses serialize `DematelResult` as-is.

/// One codebook entry.
#[derive(Debug, Clone, Serialize)]
pub struct TermView {
    pub symbol: String,
    pub label: String,
    pub expected_value: f64,
    pub a: [f64; 4],
    pub b: [f64; 4],
}

/// Response for `GET /api/dematel/terms`.
#[derive(Debug, Clone, Serialize)]
pub struct TermsResponse {
    pub terms: Vec<TermView>,
}

impl TermsResponse {
    pub fn from_codebook() -> Self {
        let terms = Codebook::entries()
            .map(|(term, pair)| TermView {
                symbol: term.symbol().to_string(),
                label: term.label().to_string(),
                expected_value: pair.expected_value().to_f64().unwrap_or(f64::NAN),
                a: pair.a(),
                b: pair.b(),
            })
            .collect();
        Self { terms }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds the response from a domain error; details only when `verbose`.
    pub fn from_domain(error: &DomainError, verbose: bool) -> Self {
        let details = (verbose && !error.details.is_empty()).then(|| {
            serde_json::Value::Object(
                error
                    .details
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
        });
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
