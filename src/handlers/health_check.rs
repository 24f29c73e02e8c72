//! # Health Check Handler
//!
//! Liveness check answering with the standard success envelope, carrying the
//! service status and the running crate version.

use axum::http::StatusCode;
use tracing::{debug, instrument};

use crate::models::HealthCheckResponse;
use crate::response::{HttpResponse, JsonEnvelope};

/// Health check endpoint.
///
/// GET /health
///
/// Performs no dependency checks; answering at all means the service is up.
///
/// # Returns
///
/// Always `200 OK` with
/// `{"code":200,"msg":"Success","data":{"status":"healthy","version":"<crate version>"}}`.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn health_check() -> JsonEnvelope<HealthCheckResponse> {
    debug!("Health check endpoint accessed");
    JsonEnvelope(
        StatusCode::OK,
        HttpResponse::success(HealthCheckResponse::healthy()),
    )
}
