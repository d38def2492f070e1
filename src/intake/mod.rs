//! Credential intake - the request-to-domain boundary of the login endpoint.
//!
//! This module owns the transformation from an untrusted request body to a
//! validated [`Credentials`](crate::domain::Credentials) value:
//! - [`CredentialDecoder`] parses and validates the body
//! - [`ErrorResponder`] is the injected capability that emits the error
//!   response on the failure path
//! - [`RequestContext`] carries per-request metadata and the reply slot

pub mod context;
pub mod decoder;
pub mod responder;

pub use context::RequestContext;
pub use decoder::CredentialDecoder;
pub use responder::{ErrorResponder, HttpResponder};
