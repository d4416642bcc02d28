//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProbeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the probe schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but failed semantic validation.
    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<ValidationError>),
}

fn format_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProbeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ProbeConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ConfigError::Validation(vec![
            ValidationError {
                field: "http.request_timeout_secs",
                message: "must be greater than zero".to_string(),
            },
            ValidationError {
                field: "workflow.recipe_marker",
                message: "must not be empty".to_string(),
            },
        ]);

        let rendered = error.to_string();
        assert!(rendered.contains("http.request_timeout_secs"));
        assert!(rendered.contains("workflow.recipe_marker"));
    }
}
