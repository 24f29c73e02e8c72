use axum::http::{Method, Uri};
use tracing::{debug, instrument};

use crate::error::AppError;

/// Router fallback: any unrouted request gets `404` with a not-found envelope.
#[instrument(skip_all)]
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    debug!(%method, %uri, "No route matched");
    AppError::NotFound("not found")
}

/// Fallback for routes that exist but not for the request method: `405`
/// with a method-not-allowed envelope.
#[instrument(skip_all)]
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    debug!(%method, %uri, "Method not allowed on route");
    AppError::MethodNotAllowed
}
