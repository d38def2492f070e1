//! Integration tests for the login intake endpoint.
//!
//! These tests drive the full router with in-memory requests; no network
//! or external services are required.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use credent::api::{create_router, AppState};

// =============================================================================
// Test Helpers
// =============================================================================

/// Build a POST /login request with the given JSON body
fn login_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request through a fresh router
async fn send(request: Request<Body>) -> Response {
    create_router(AppState::new())
        .oneshot(request)
        .await
        .unwrap()
}

/// Read and parse a JSON response body
async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Login Intake Tests
// =============================================================================

#[tokio::test]
async fn test_valid_login_is_accepted() {
    let response = send(login_request(
        r#"{"username":"alice","password":"secret"}"#,
    ))
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    // Success responses use the standard envelope
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "alice");
    // The password never appears in the response
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_missing_password_is_rejected() {
    let response = send(login_request(r#"{"username":"alice"}"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "password is required");
}

#[tokio::test]
async fn test_empty_username_is_rejected() {
    let response = send(login_request(r#"{"username":"","password":"x"}"#)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let response = send(login_request("not-json-at-all")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "DECODE_ERROR");
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let response = send(login_request(
        r#"{"username":"alice","password":"secret","remember_me":true}"#,
    ))
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_error_body_shape() {
    let body = response_json(send(login_request("{}")).await).await;

    // Errors follow the centralized {"error": {"code", "message"}} envelope
    let error = body["error"].as_object().unwrap();
    assert!(error.contains_key("code"));
    assert!(error.contains_key("message"));
}

// =============================================================================
// Response Wrapper Tests
// =============================================================================

#[tokio::test]
async fn test_api_response_structure() {
    use credent::types::ApiResponse;

    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_api_response_with_message() {
    use credent::types::ApiResponse;

    let response: ApiResponse<i32> = ApiResponse::with_message(42, "Operation completed");
    assert!(response.success);
    assert_eq!(response.data.unwrap(), 42);
    assert_eq!(response.message.unwrap(), "Operation completed");
}

#[tokio::test]
async fn test_message_only_response() {
    use credent::types::ApiResponse;

    let response: ApiResponse<()> = ApiResponse::message("Success");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Success");
}

// =============================================================================
// API Documentation Tests
// =============================================================================

#[tokio::test]
async fn test_openapi_document_covers_login() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = send(request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let doc = response_json(response).await;
    assert!(doc["paths"]["/login"]["post"].is_object());

    let schemas = doc["components"]["schemas"].as_object().unwrap();
    assert!(schemas.contains_key("LoginRequest"));
    assert!(schemas.contains_key("LoginAcceptedResponse"));
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_banner() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint_reports_healthy() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = send(request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}
