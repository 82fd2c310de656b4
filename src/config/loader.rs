//! Configuration file discovery and loading.
//!
//! An explicit `--config` path must exist. Otherwise the user config at
//! `~/.toolprobe/config.yml` is loaded when present, and built-in defaults
//! apply when it isn't.

use crate::config::schema::ToolprobeConfig;
use crate::error::{Result, ToolprobeError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the user config: `~/.toolprobe/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".toolprobe").join("config.yml"))
}

/// Load a single config file and parse it into `ToolprobeConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ToolprobeConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ToolprobeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ToolprobeError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    config.extra_paths = config
        .extra_paths
        .iter()
        .map(|p| expand_home(p, dirs::home_dir().as_deref()))
        .collect();
    Ok(config)
}

/// Parse YAML content into `ToolprobeConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ToolprobeConfig> {
    if content.trim().is_empty() {
        return Ok(ToolprobeConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ToolprobeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// With an override, that file is required. Without one, the default user
/// config is used if it exists.
pub fn load_config(config_override: Option<&Path>) -> Result<ToolprobeConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        _ => {
            tracing::debug!("No user config found, using defaults");
            Ok(ToolprobeConfig::default())
        }
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
