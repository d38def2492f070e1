//! Credential decoder - parse-and-validate pipeline for login requests.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::Credentials;
use crate::errors::{AppError, AppResult};
use crate::intake::{ErrorResponder, RequestContext};

/// Raw shape of the login request body.
///
/// Fields are optional so that presence is checked explicitly after the
/// structural parse rather than through deserializer rejection; unknown
/// extra fields are ignored.
#[derive(Debug, Deserialize)]
struct RawCredentials {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// Decodes an untrusted request body into validated [`Credentials`].
///
/// The decoder is stateless and request-scoped in effect: each `decode`
/// call is independent, so one instance can be shared across concurrent
/// requests. On any failure it invokes the injected [`ErrorResponder`]
/// exactly once and returns the classified error to the caller, whose only
/// contract is "a non-`Ok` result means a response has already been sent".
pub struct CredentialDecoder {
    responder: Arc<dyn ErrorResponder>,
}

impl CredentialDecoder {
    pub fn new(responder: Arc<dyn ErrorResponder>) -> Self {
        Self { responder }
    }

    /// Decode and validate a login request body.
    ///
    /// Classification:
    /// - malformed syntax, a non-object top level, or a non-string field
    ///   type is a [`AppError::Decode`]
    /// - a missing or empty `username`/`password` is a [`AppError::Validation`]
    pub fn decode(&self, ctx: &RequestContext, body: &[u8]) -> AppResult<Credentials> {
        let raw: RawCredentials = match serde_json::from_slice(body) {
            Ok(raw) => raw,
            Err(e) => return Err(self.reject(ctx, AppError::decode(e.to_string()))),
        };

        match require_fields(raw) {
            Ok(credentials) => Ok(credentials),
            Err(missing) => {
                let message = missing
                    .iter()
                    .map(|field| format!("{} is required", field))
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(self.reject(ctx, AppError::validation(message)))
            }
        }
    }

    /// Route the error through the responder, then hand it back to the caller.
    fn reject(&self, ctx: &RequestContext, error: AppError) -> AppError {
        self.responder.respond(ctx, &error);
        error
    }
}

/// Check that both required fields are present and non-empty.
///
/// Returns the constructed credentials, or the names of every violated
/// field. A JSON `null` counts as absent.
fn require_fields(raw: RawCredentials) -> Result<Credentials, Vec<&'static str>> {
    let mut missing = Vec::new();
    if raw.username.as_deref().unwrap_or("").is_empty() {
        missing.push("username");
    }
    if raw.password.as_deref().unwrap_or("").is_empty() {
        missing.push("password");
    }

    if missing.is_empty() {
        Ok(Credentials::new(
            raw.username.unwrap_or_default(),
            raw.password.unwrap_or_default(),
        ))
    } else {
        Err(missing)
    }
}
