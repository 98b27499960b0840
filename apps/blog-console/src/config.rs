//! Application configuration loaded from environment variables.

use blog_infra::StorageConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
