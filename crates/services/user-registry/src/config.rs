//! User registry configuration.

use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "user-registry";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REPORT_TITLE: &str = "User Report";

/// User registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRegistryConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Heading printed at the top of every report
    pub report_title: String,
}

impl UserRegistryConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            service_name: env::var("USER_REGISTRY_SERVICE_NAME")
                .unwrap_or(defaults.service_name),
            log_level: env::var("USER_REGISTRY_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            report_title: env::var("USER_REGISTRY_REPORT_TITLE")
                .ok()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.report_title),
        }
    }
}

impl Default for UserRegistryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}
