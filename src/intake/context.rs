//! Per-request context passed through the intake pipeline.

use std::sync::Mutex;

use axum::http::Method;
use axum::response::Response;

/// Request-scoped context for one decode attempt.
///
/// Carries the request metadata the responder logs against, plus the reply
/// slot the responder deposits the error response into. Created by the
/// handler at the start of the request and dropped with it; never shared
/// across requests.
pub struct RequestContext {
    method: Method,
    path: String,
    reply: Mutex<Option<Response>>,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            reply: Mutex::new(None),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Deposit the error response for this request.
    ///
    /// Returns `false` if a response was already deposited; the first
    /// response wins, keeping the at-most-once contract.
    pub fn set_reply(&self, response: Response) -> bool {
        let mut slot = self.reply.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            return false;
        }
        *slot = Some(response);
        true
    }

    /// Take the deposited response, if any. Yields it at most once.
    pub fn take_reply(&self) -> Option<Response> {
        self.reply.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}
