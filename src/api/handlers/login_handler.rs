//! Login intake handler.

use axum::{
    body::Bytes,
    http::{Method, Uri},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::errors::AppError;
use crate::intake::RequestContext;
use crate::types::ApiResponse;

/// Login request body schema (API documentation).
///
/// Decoding itself happens byte-level in [`crate::intake`], so extra
/// fields beyond these two are accepted and ignored.
#[derive(Debug, ToSchema)]
pub struct LoginRequest {
    /// Account username
    #[schema(example = "alice")]
    pub username: String,
    /// Account password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Acknowledgement returned once credentials pass intake.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginAccepted {
    /// Username the credentials were accepted for
    #[schema(example = "alice")]
    pub username: String,
}

/// Success envelope schema for the login endpoint (API documentation).
///
/// Mirrors [`ApiResponse`] with the acknowledgement as its data payload.
#[derive(Debug, ToSchema)]
pub struct LoginAcceptedResponse {
    /// Always `true` on the success path
    #[schema(example = true)]
    pub success: bool,
    pub data: LoginAccepted,
}

/// Create login routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Accept a login request
#[utoipa::path(
    post,
    path = "/login",
    tag = "Login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginAcceptedResponse),
        (status = 400, description = "Malformed body or missing required field")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let ctx = RequestContext::new(method, uri.path());

    match state.decoder.decode(&ctx, &body) {
        Ok(credentials) => {
            // Verification and session issuance happen downstream of intake
            tracing::info!(username = %credentials.username, "credentials accepted");
            Json(ApiResponse::success(LoginAccepted {
                username: credentials.username,
            }))
            .into_response()
        }
        // The responder already deposited the error response
        Err(_) => ctx.take_reply().unwrap_or_else(|| {
            AppError::internal("no error response deposited for failed decode").into_response()
        }),
    }
}
