//! Service health checks

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor};

/// Health report for the coordination service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub services: HashMap<String, String>,
}

impl HealthStatus {
    /// Whether the service reports itself healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy")
    }
}

/// Façade for the health endpoint
pub struct Health {
    http: Arc<HttpClient>,
}

impl Health {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Check service health
    pub async fn check(&self) -> Result<HealthStatus> {
        let descriptor = RequestDescriptor::get("/api/v1/health");
        self.http.request_json(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_healthy() {
        let healthy = HealthStatus {
            status: "ok".to_string(),
            version: None,
            services: HashMap::new(),
        };
        assert!(healthy.is_healthy());

        let degraded = HealthStatus {
            status: "degraded".to_string(),
            version: None,
            services: HashMap::new(),
        };
        assert!(!degraded.is_healthy());
    }
}
