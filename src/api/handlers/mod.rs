//! HTTP request handlers.

pub mod login_handler;

pub use login_handler::login_routes;
