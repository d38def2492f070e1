//! Domain layer - Core business entities
//!
//! Contains the domain values that represent business concepts
//! independent of transport and infrastructure concerns.

pub mod credentials;

pub use credentials::Credentials;
