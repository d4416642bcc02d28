//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is an absolute http(s) URL
//! - Validate value ranges (timeouts > 0, display limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProbeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::ProbeConfig;

/// Ceiling for the consistency wait; anything longer is a misconfiguration.
const MAX_CONSISTENCY_WAIT_MS: u64 = 60_000;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,

    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.server.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "server.base_url",
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "server.base_url",
            message: format!("not a valid URL: {}", e),
        }),
    }

    if !config.server.health_path.starts_with('/') {
        errors.push(ValidationError {
            field: "server.health_path",
            message: "must start with '/'".to_string(),
        });
    }

    if config.http.connect_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "http.connect_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.http.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "http.request_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.workflow.recipe_marker.is_empty() {
        errors.push(ValidationError {
            field: "workflow.recipe_marker",
            message: "must not be empty".to_string(),
        });
    }

    if config.workflow.create_recipe.is_empty() {
        errors.push(ValidationError {
            field: "workflow.create_recipe",
            message: "must not be empty".to_string(),
        });
    }

    if config.workflow.read_recipe.is_empty() {
        errors.push(ValidationError {
            field: "workflow.read_recipe",
            message: "must not be empty".to_string(),
        });
    }

    if config.workflow.consistency_wait_ms > MAX_CONSISTENCY_WAIT_MS {
        errors.push(ValidationError {
            field: "workflow.consistency_wait_ms",
            message: format!("must not exceed {}", MAX_CONSISTENCY_WAIT_MS),
        });
    }

    if config.workflow.history_display_limit == 0 {
        errors.push(ValidationError {
            field: "workflow.history_display_limit",
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
