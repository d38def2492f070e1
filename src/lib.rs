//! Credent - Credential intake boundary for a login endpoint
//!
//! This crate decodes raw login request bodies into validated
//! [`Credentials`](domain::Credentials) values. Parsing and required-field
//! validation live in [`intake`]; on failure the decoder routes a
//! classified error through an injected responder so the client always
//! receives exactly one error response. Password verification and session
//! issuance are downstream concerns and live outside this crate.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business values
//! - **intake**: Request-to-domain decode pipeline
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (response wrappers)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod intake;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::Credentials;
pub use errors::{AppError, AppResult};
pub use intake::{CredentialDecoder, ErrorResponder, RequestContext};
