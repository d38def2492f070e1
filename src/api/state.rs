//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::intake::{CredentialDecoder, ErrorResponder, HttpResponder};

/// Application state shared by all handlers.
///
/// Holds the credential decoder wired to the production HTTP responder.
/// Cloning is cheap; nothing here is mutable across requests.
#[derive(Clone)]
pub struct AppState {
    /// Credential intake decoder
    pub decoder: Arc<CredentialDecoder>,
}

impl AppState {
    /// Create application state with the production error responder.
    pub fn new() -> Self {
        Self::with_responder(Arc::new(HttpResponder))
    }

    /// Create application state with an injected responder.
    ///
    /// Lets tests swap in a recording responder without touching the
    /// decoder wiring.
    pub fn with_responder(responder: Arc<dyn ErrorResponder>) -> Self {
        Self {
            decoder: Arc::new(CredentialDecoder::new(responder)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
