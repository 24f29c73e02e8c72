//! # HTTP Request Handlers
//!
//! Each handler answers with a response envelope, see [`crate::response`].
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Fallback** (`fallback`) - Envelope-shaped 404 and 405 for unmatched requests

mod fallback;
mod health_check;

pub use fallback::*;
pub use health_check::*;
