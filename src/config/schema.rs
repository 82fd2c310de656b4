//! Configuration schema definitions for toolprobe.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure for `~/.toolprobe/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolprobeConfig {
    /// Package manager command used in install hints (`<pm> install <pkg>`).
    pub package_manager: String,

    /// Global settings
    pub settings: Settings,

    /// Directories searched after PATH
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_paths: Vec<PathBuf>,

    /// Custom or overriding tool definitions, keyed by tool name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tools: BTreeMap<String, ToolConfig>,
}

impl Default for ToolprobeConfig {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager().to_string(),
            settings: Settings::default(),
            extra_paths: Vec::new(),
            tools: BTreeMap::new(),
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,
}

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// A tool definition from config.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    /// Executable names to probe, in order. Defaults to the tool name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,

    /// Package name passed to the package manager. Defaults to the tool name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Verbatim install hint, replacing the `<pm> install <pkg>` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_hint: Option<String>,

    /// Short description shown by `toolprobe list`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The package manager assumed when config doesn't name one.
pub fn default_package_manager() -> &'static str {
    if cfg!(target_os = "windows") {
        "scoop"
    } else if cfg!(target_os = "macos") {
        "brew"
    } else {
        "apt"
    }
}
