//! Error types for toolprobe operations.
//!
//! This module defines [`ToolprobeError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing tool is not an error. Availability checks return `Ok(false)`.
//! - `InvalidCommandName` marks a bug in the calling code and must never be
//!   confused with a tool that is simply not installed.
//! - Use `anyhow::Error` (via `ToolprobeError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolprobe operations.
#[derive(Debug, Error)]
pub enum ToolprobeError {
    /// A command name was empty or not a plain executable name.
    #[error("Invalid command name {name:?}: {reason}")]
    InvalidCommandName { name: String, reason: String },

    /// No fragment is registered under this name.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A forwarded command could not be started.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolprobeError {
    /// Whether this error signals a programming mistake in the caller.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidCommandName { .. })
    }
}

/// Result type alias for toolprobe operations.
pub type Result<T> = std::result::Result<T, ToolprobeError>;
