//! Configuration loading, parsing, and validation for toolprobe.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use toolprobe::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "package_manager: scoop").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.package_manager, "scoop");
//! ```
//!
//! # Configuration File Location
//!
//! `--config <path>` wins; otherwise `~/.toolprobe/config.yml` is read when
//! it exists.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{default_config_path, expand_home, load_config, load_config_file, parse_config};
pub use schema::{default_package_manager, OutputMode, Settings, ToolConfig, ToolprobeConfig};
pub use validator::{validate, validate_config, ValidationError};
