//! Application state
//!
//! Holds the configuration snapshot shared by every handler.

use std::sync::Arc;

use probe_common::{AppConfig, BackendTargets};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, read once at startup
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the configured backend targets
    pub fn targets(&self) -> &BackendTargets {
        &self.config.backends
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Targets may embed credentials
        f.debug_struct("AppState")
            .field("app", &self.config.app)
            .field("server", &self.config.server)
            .finish_non_exhaustive()
    }
}
