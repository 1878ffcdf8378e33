//! Integration tests for DEMATEL HTTP endpoints.
//!
//! These tests drive the fully assembled router in-process:
//! 1. Valid submissions return the full analysis
//! 2. Domain failures map to status codes and error bodies
//! 3. Middleware sets request ids

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use dematel_engine::adapters::build_app;
use dematel_engine::config::{AppConfig, FeatureFlags, ServerConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    build_app(&AppConfig::default()).unwrap()
}

fn verbose_app() -> Router {
    let config = AppConfig {
        features: FeatureFlags {
            verbose_errors: true,
            enable_tracing: false,
        },
        ..AppConfig::default()
    };
    build_app(&config).unwrap()
}

fn app_with_origins(origins: &str) -> Router {
    let config = AppConfig {
        server: ServerConfig {
            cors_origins: Some(origins.to_string()),
            ..ServerConfig::default()
        },
        ..AppConfig::default()
    };
    build_app(&config).unwrap()
}

fn from_origin(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/health")
        .header("origin", origin)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn dominant_submission() -> Value {
    json!({
        "criteria": ["Cost", "Quality"],
        "alternatives": ["Supplier", "Consumer"],
        "weights": [0.6, 0.4],
        "matrix": [["AHI", "AHI"], ["ALI", "ALI"]]
    })
}

// =============================================================================
// Success Paths
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn analyze_returns_ranking_and_matrices() {
    let (status, body) = send(app(), post_json("/api/dematel", dominant_submission())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crisp_matrix"], json!([[1.0, 1.0], [0.0, 0.0]]));
    assert_eq!(body["scale_factor"], json!(0.5));
    assert_eq!(body["prominence"], json!([3.0, 1.0]));
    assert_eq!(body["relation"], json!([1.0, -1.0]));
    assert_eq!(body["ranking"][0]["alternative"], "Supplier");
    assert_eq!(body["ranking"][0]["type"], "Cause");
    assert_eq!(body["ranking"][1]["alternative"], "Consumer");
    assert_eq!(body["ranking"][1]["type"], "Effect");
}

#[tokio::test]
async fn lowercase_terms_are_accepted() {
    let mut submission = dominant_submission();
    submission["matrix"] = json!([["ahi", " ahi "], ["ali", "Ali"]]);

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ranking"][0]["alternative"], "Supplier");
}

#[tokio::test]
async fn crisp_endpoint_matches_linguistic_endpoint() {
    let crisp = json!({
        "criteria": ["Cost", "Quality"],
        "alternatives": ["Supplier", "Consumer"],
        "matrix": [[1.0, 1.0], [0.0, 0.0]]
    });

    let (_, from_terms) = send(app(), post_json("/api/dematel", dominant_submission())).await;
    let (status, from_values) = send(app(), post_json("/api/dematel/crisp", crisp)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(from_terms, from_values);
}

#[tokio::test]
async fn terms_lists_codebook() {
    let (status, body) = send(app(), get("/api/dematel/terms")).await;

    assert_eq!(status, StatusCode::OK);
    let terms = body["terms"].as_array().unwrap();
    assert_eq!(terms.len(), 7);
    assert_eq!(terms[0]["symbol"], "ALI");
    assert_eq!(terms[6]["symbol"], "AHI");
}

#[tokio::test]
async fn analysis_body_is_the_result_fields() {
    let (_, body) = send(app(), post_json("/api/dematel", dominant_submission())).await;

    let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "crisp_matrix",
            "influence_given",
            "influence_received",
            "normalized_matrix",
            "prominence",
            "ranking",
            "relation",
            "scale_factor",
            "total_relation_matrix",
        ]
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn cors_is_same_origin_by_default() {
    let response = app().oneshot(from_origin("http://elsewhere.test")).await.unwrap();
    assert!(!response
        .headers()
        .contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn cors_wildcard_allows_any_origin() {
    let response = app_with_origins("*")
        .oneshot(from_origin("http://elsewhere.test"))
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_list_echoes_listed_origin_only() {
    let listed = app_with_origins("http://a.test, http://b.test")
        .oneshot(from_origin("http://b.test"))
        .await
        .unwrap();
    assert_eq!(listed.headers()["access-control-allow-origin"], "http://b.test");

    let unlisted = app_with_origins("http://a.test, http://b.test")
        .oneshot(from_origin("http://c.test"))
        .await
        .unwrap();
    assert!(!unlisted
        .headers()
        .contains_key("access-control-allow-origin"));
}

// =============================================================================
// Failure Paths
// =============================================================================

#[tokio::test]
async fn invalid_terms_are_bad_request() {
    let mut submission = dominant_submission();
    submission["matrix"] = json!([["AHI", "XX"], ["ALI", "ALI"]]);

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_TERM");
    assert!(body["message"].as_str().unwrap().contains("Alt 1 - Crit 2 = 'XX'"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn verbose_errors_include_details() {
    let mut submission = dominant_submission();
    submission["matrix"] = json!([["AHI", "XX"], ["ALI", "ALI"]]);

    let (status, body) = send(verbose_app(), post_json("/api/dematel", submission)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["invalid_count"], "1");
}

#[tokio::test]
async fn ragged_matrix_is_shape_mismatch() {
    let mut submission = dominant_submission();
    submission["matrix"] = json!([["MI", "HI"], ["LI"]]);

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SHAPE_MISMATCH");
}

#[tokio::test]
async fn ragged_crisp_matrix_is_shape_mismatch() {
    let crisp = json!({
        "criteria": ["C1", "C2"],
        "matrix": [[0.5, 0.2], [0.1]]
    });

    let (status, body) = send(app(), post_json("/api/dematel/crisp", crisp)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "SHAPE_MISMATCH");
}

#[tokio::test]
async fn missing_weight_is_incomplete_input() {
    let mut submission = dominant_submission();
    submission["weights"] = json!([0.6, null]);

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INCOMPLETE_INPUT");
}

#[tokio::test]
async fn singular_matrix_is_unprocessable() {
    let mut submission = dominant_submission();
    submission["matrix"] = json!([["MI", "MI"], ["MI", "MI"]]);

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MATRIX_INVERSION_FAILED");
}

#[tokio::test]
async fn all_zero_matrix_is_unprocessable() {
    let mut submission = dominant_submission();
    submission["matrix"] = json!([["ALI", "ALI"], ["ALI", "ALI"]]);

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "DEGENERATE_SCALE");
}

#[tokio::test]
async fn oversized_matrix_is_payload_too_large() {
    let n = 51;
    let submission = json!({
        "criteria": (0..n).map(|j| format!("C{}", j)).collect::<Vec<_>>(),
        "alternatives": (0..n).map(|i| format!("A{}", i)).collect::<Vec<_>>(),
        "weights": vec![1.0; n],
        "matrix": vec![vec!["MI"; n]; n],
    });

    let (status, body) = send(app(), post_json("/api/dematel", submission)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "MATRIX_TOO_LARGE");
}

#[tokio::test]
async fn out_of_range_crisp_value_is_bad_request() {
    let crisp = json!({
        "criteria": ["C1", "C2"],
        "matrix": [[0.5, 1.2], [0.0, 0.3]]
    });

    let (status, body) = send(app(), post_json("/api/dematel/crisp", crisp)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CRISP_VALUE");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/dematel")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
