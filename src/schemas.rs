use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::HostConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Resolved host configuration
    pub config: Arc<HostConfig>,
}

impl AppState {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the compiled frontend entry page is present
    pub frontend: String,
}
