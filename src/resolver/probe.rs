//! Availability probes.
//!
//! A [`CommandProbe`] answers whether an executable name resolves right now.
//! The resolver calls it at most once per name between invalidations, so
//! probes don't cache anything themselves.
//!
//! # Example
//!
//! ```no_run
//! use toolprobe::resolver::{CommandName, CommandProbe, PathProbe};
//!
//! let probe = PathProbe::from_env();
//! let git = CommandName::parse("git").unwrap();
//! if let Some(path) = probe.locate(&git) {
//!     println!("git is {}", path.display());
//! }
//! assert_eq!(probe.resolve(&git), probe.locate(&git).is_some());
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::name::CommandName;

/// Capability to check whether a command resolves on the current system.
pub trait CommandProbe: Send + Sync {
    /// Return `true` when `name` resolves to a usable executable.
    ///
    /// Lookup failures (unreadable directories, bad metadata) count as
    /// "not found".
    fn resolve(&self, name: &CommandName) -> bool;

    /// Return the full path of the executable, if the probe can tell.
    fn locate(&self, name: &CommandName) -> Option<PathBuf> {
        let _ = name;
        None
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| split_path_var(&path))
        .unwrap_or_default()
}

fn split_path_var(path: &OsString) -> Vec<PathBuf> {
    std::env::split_paths(path)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Executable extensions from `PATHEXT`, lowercased, with a leading dot.
///
/// Falls back to the stock Windows list when the variable is unset.
pub fn parse_pathext(value: Option<&str>) -> Vec<String> {
    let raw = value.unwrap_or(".COM;.EXE;.BAT;.CMD");
    raw.split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            let ext = ext.to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. For each directory
/// the bare name is tried first, then the name with each of `extensions`
/// appended (used for `PATHEXT` on Windows; pass an empty slice elsewhere).
pub fn resolve_tool_path(
    tool: &str,
    path_entries: &[PathBuf],
    extensions: &[String],
) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        for ext in extensions {
            let candidate = dir.join(format!("{}{}", tool, ext));
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Searches a fixed list of directories, like a shell's PATH lookup.
///
/// The directory list is captured at construction.
#[derive(Debug, Clone)]
pub struct PathProbe {
    path_entries: Vec<PathBuf>,
    extra_paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl PathProbe {
    /// Probe the process `PATH`.
    pub fn from_env() -> Self {
        Self::from_env_with_extra(Vec::new())
    }

    /// Probe the process `PATH`, then `extra_paths` in order.
    pub fn from_env_with_extra(extra_paths: Vec<PathBuf>) -> Self {
        Self {
            path_entries: parse_system_path(),
            extra_paths,
            extensions: platform_extensions(),
        }
    }

    /// Probe an explicit directory list (no `PATHEXT` on any platform).
    pub fn with_paths(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            extra_paths: Vec::new(),
            extensions: Vec::new(),
        }
    }

    /// Override the extension list tried after the bare name.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// All directories searched, in order.
    pub fn search_path(&self) -> Vec<PathBuf> {
        let mut result = self.path_entries.clone();
        for extra in &self.extra_paths {
            if !result.contains(extra) {
                result.push(extra.clone());
            }
        }
        result
    }
}

impl CommandProbe for PathProbe {
    fn resolve(&self, name: &CommandName) -> bool {
        self.locate(name).is_some()
    }

    fn locate(&self, name: &CommandName) -> Option<PathBuf> {
        let found = resolve_tool_path(name.as_str(), &self.search_path(), &self.extensions);
        tracing::debug!(
            "PATH lookup for {}: {}",
            name,
            found
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "not found".to_string())
        );
        found
    }
}

fn platform_extensions() -> Vec<String> {
    if cfg!(windows) {
        parse_pathext(std::env::var("PATHEXT").ok().as_deref())
    } else {
        Vec::new()
    }
}
