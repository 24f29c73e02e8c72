//! # Result Code Validation
//!
//! Internal result codes follow a simple convention: exactly 11 decimal
//! digits, where `code / 10^8` gives a category of 200 (success), 400
//! (client error) or 500 (server error). This module classifies codes under
//! that convention. It never produces codes, see [`crate::utils::constant`]
//! for the catalog.

use axum::http::StatusCode;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::utils::constant::{CATEGORY_DIVISOR, MAX_STATUS_CODE, MIN_STATUS_CODE};

/// Coarse classification derived from the leading digits of a result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// Category 200
    Success,
    /// Category 400
    ClientError,
    /// Category 500
    ServerError,
}

impl StatusCategory {
    /// Classifies an internal result code.
    ///
    /// Returns `None` when the code is not exactly 11 digits long (negative
    /// numbers included) or when its category is not 200, 400 or 500.
    ///
    /// # Examples
    ///
    /// - `20000000000` -> `Some(Success)`
    /// - `40000000001` -> `Some(ClientError)`
    /// - `30000000000` -> `None`
    /// - `999999999` -> `None` (too short)
    pub fn of(code: i64) -> Option<Self> {
        if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&code) {
            return None;
        }

        match code / CATEGORY_DIVISOR {
            200 => Some(Self::Success),
            400 => Some(Self::ClientError),
            500 => Some(Self::ServerError),
            _ => None,
        }
    }

    /// Transport status matching this category, for callers that choose to
    /// couple the envelope code with the HTTP status.
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ClientError => StatusCode::BAD_REQUEST,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Checks whether `code` is a well-formed internal result code.
///
/// Pure and total: every input yields a boolean, nothing is logged.
#[inline]
pub fn validate_status_code(code: i64) -> bool {
    StatusCategory::of(code).is_some()
}

/// Classifies a caller-supplied result code, rejecting malformed ones.
///
/// # Errors
///
/// [`AppError::InvalidStatusCode`] when the code is not well-formed.
pub fn ensure_status_code(code: i64) -> AppResult<StatusCategory> {
    StatusCategory::of(code).ok_or_else(|| {
        debug!(code, "Rejected malformed result code");
        AppError::InvalidStatusCode(code)
    })
}
