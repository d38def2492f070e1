//! Shared types - Common response wrappers.

pub mod response;

pub use response::ApiResponse;
