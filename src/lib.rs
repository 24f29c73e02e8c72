//! # Service Template
//!
//! Minimal HTTP service scaffold: a health check endpoint and a uniform
//! `{code, msg, data}` response envelope.
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven server configuration
//! - [`error`] - Application error type rendered as error envelopes
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Payload types
//! - [`response`] - Response envelope and its JSON writer
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Result-code catalog and validator

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod telemetry;
pub mod utils;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, method_not_allowed, not_found};

/// Creates the Axum router with all application routes.
///
/// Unrouted requests get a `404` not-found envelope, requests with an
/// unsupported method a `405` envelope.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
