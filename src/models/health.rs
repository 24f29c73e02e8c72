use serde::{Deserialize, Serialize};

use crate::utils::constant::SERVICE_VERSION;

/// Payload of the health check endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

impl HealthCheckResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}
