//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the probe.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the integration probe.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProbeConfig {
    /// Target server settings (base URL, health path).
    pub server: ServerConfig,

    /// HTTP client timeout configuration.
    pub http: HttpConfig,

    /// Product workflow scenario settings.
    pub workflow: WorkflowConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Target server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the accounting server (e.g., "http://127.0.0.1:3003").
    pub base_url: String,

    /// Path of the health document endpoint.
    pub health_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3003".to_string(),
            health_path: "/health".to_string(),
        }
    }
}

/// Timeout configuration for outbound HTTP calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

/// Product workflow scenario configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Substring marking the recipes this probe exercises.
    pub recipe_marker: String,

    /// Name of the recipe that creates a product.
    pub create_recipe: String,

    /// Name of the recipe that reads a product back.
    pub read_recipe: String,

    /// Pause between the create and read steps in milliseconds.
    ///
    /// The server's write path may not be immediately visible to reads;
    /// this is a fixed wait, not a polling loop.
    pub consistency_wait_ms: u64,

    /// Maximum number of history entries shown per product.
    pub history_display_limit: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            recipe_marker: "realistic".to_string(),
            create_recipe: "create_realistic_product".to_string(),
            read_recipe: "read_realistic_product".to_string(),
            consistency_wait_ms: 100,
            history_display_limit: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
