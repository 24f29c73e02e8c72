//! # Centralized Error Handling
//!
//! This module provides a unified error type for handlers. Every error is
//! rendered as a response envelope whose `code` comes from the result-code
//! catalog in [`crate::utils::constant`], paired with a matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::response::{BufferedSink, HttpResponse, ResponseError, write_response};
use crate::utils::constant::*;

/// Central application error type that encompasses all possible error conditions.
///
/// _Server-side errors are logged automatically when converted into a
/// response; client errors should be logged at the point of creation if needed._
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid status code: {0}")]
    InvalidStatusCode(i64),

    #[error("response error")]
    Response(#[from] ResponseError),
}

impl AppError {
    /// Transport status, internal result code and client-facing message for this error.
    pub fn parts(&self) -> (StatusCode, i64, &'static str) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ERR_NOT_FOUND, *msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ERR_METHOD_NOT_ALLOWED,
                "method not allowed",
            ),
            AppError::InvalidStatusCode(_) => {
                (StatusCode::BAD_REQUEST, ERR_BAD_REQUEST, "invalid status code")
            }
            AppError::Response(ResponseError::Serialization(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ERR_SERIALIZATION,
                "Serialization error",
            ),
            AppError::Response(ResponseError::AlreadyWritten) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ERR_INTERNAL,
                "Internal server error",
            ),
        }
    }

    /// Internal result code placed in the error envelope.
    pub fn envelope_code(&self) -> i64 {
        self.parts().1
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            error!(error = ?self, code, "Request failed with server error");
        }

        let envelope = HttpResponse::<()>::error(code, message, None);
        let mut sink = BufferedSink::new();
        match write_response(&mut sink, status, &envelope) {
            Ok(()) => sink.into_response(),
            // unreachable for a payload-less envelope
            Err(e) => {
                error!(?e, code, "Failed to write error envelope");
                status.into_response()
            }
        }
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
