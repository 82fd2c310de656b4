//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - The package manager must be named
//! - Tool names and candidates must be plain command names
//! - A candidate list, if given, can't be empty

use crate::config::schema::ToolprobeConfig;
use crate::error::{Result, ToolprobeError};
use crate::resolver::CommandName;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Tool name if error is tool-specific
    pub tool: Option<String>,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &ToolprobeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.package_manager.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-package-manager".to_string(),
            message: "'package_manager' must not be empty".to_string(),
            tool: None,
        });
    }

    for (name, tool) in &config.tools {
        if let Err(e) = CommandName::parse(name) {
            errors.push(ValidationError {
                rule: "invalid-tool-name".to_string(),
                message: e.to_string(),
                tool: Some(name.clone()),
            });
        }

        let Some(candidates) = &tool.candidates else {
            continue;
        };

        if candidates.is_empty() {
            errors.push(ValidationError {
                rule: "empty-candidates".to_string(),
                message: format!("Tool '{}' has an empty 'candidates' list", name),
                tool: Some(name.clone()),
            });
        }

        for candidate in candidates {
            if let Err(e) = CommandName::parse(candidate) {
                errors.push(ValidationError {
                    rule: "invalid-candidate".to_string(),
                    message: format!("Tool '{}': {}", name, e),
                    tool: Some(name.clone()),
                });
            }
        }
    }

    errors
}

/// Validate, folding every error into one `ConfigValidationError`.
pub fn validate(config: &ToolprobeConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(ToolprobeError::ConfigValidationError { message })
}
