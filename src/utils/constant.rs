//! # Application Constants
//!
//! This module defines the result-code catalog and other fixed values used
//! throughout the service. Internal result codes are 11-digit numbers whose
//! leading three digits name their category (200, 400 or 500).

/// Result code carried by every success envelope.
pub const SUCCESS_CODE: i64 = 200;

/// Message carried by every success envelope.
pub const SUCCESS_MSG: &str = "Success";

/// Smallest well-formed internal result code (11 digits).
pub const MIN_STATUS_CODE: i64 = 10_000_000_000;

/// Largest well-formed internal result code (11 digits).
pub const MAX_STATUS_CODE: i64 = 99_999_999_999;

/// Dividing a result code by this yields its three-digit category.
pub const CATEGORY_DIVISOR: i64 = 100_000_000;

/// Requested resource does not exist
pub const ERR_NOT_FOUND: i64 = 40_000_000_001;

/// Request was malformed or failed validation
pub const ERR_BAD_REQUEST: i64 = 40_000_000_002;

/// Route exists but not for the request method
pub const ERR_METHOD_NOT_ALLOWED: i64 = 40_000_000_003;

/// Unexpected server-side failure
pub const ERR_INTERNAL: i64 = 50_000_000_001;

/// Response payload could not be encoded as JSON
pub const ERR_SERIALIZATION: i64 = 50_000_000_002;

/// Version reported by the health check endpoint
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
