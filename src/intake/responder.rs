//! Error responder - the injected failure-path capability.

use crate::errors::AppError;
use crate::intake::RequestContext;

/// Capability for emitting an error response on the decode failure path.
///
/// Injected into [`CredentialDecoder`](crate::intake::CredentialDecoder) at
/// construction time so the decoder carries no global state and can be
/// tested with a recording fake. Implementations must be safe to call at
/// most once per request.
pub trait ErrorResponder: Send + Sync {
    fn respond(&self, ctx: &RequestContext, error: &AppError);
}

/// Production responder: renders the error through the centralized
/// [`AppError`] HTTP mapping and deposits it into the request context's
/// reply slot for the handler to return.
pub struct HttpResponder;

impl ErrorResponder for HttpResponder {
    fn respond(&self, ctx: &RequestContext, error: &AppError) {
        tracing::warn!(
            method = %ctx.method(),
            path = %ctx.path(),
            code = error.code(),
            "rejecting request: {}",
            error
        );

        if !ctx.set_reply(error.to_response()) {
            // First response wins; a second respond within one request is a bug upstream
            tracing::error!(path = %ctx.path(), "duplicate error response suppressed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};

    #[test]
    fn test_respond_deposits_reply() {
        let ctx = RequestContext::new(Method::POST, "/login");
        let error = AppError::validation("username is required");

        HttpResponder.respond(&ctx, &error);

        let reply = ctx.take_reply().expect("responder should deposit a reply");
        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_second_respond_keeps_first_reply() {
        let ctx = RequestContext::new(Method::POST, "/login");

        HttpResponder.respond(&ctx, &AppError::validation("password is required"));
        HttpResponder.respond(&ctx, &AppError::internal("should not replace"));

        let reply = ctx.take_reply().unwrap();
        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
        assert!(ctx.take_reply().is_none());
    }
}
