//! Validated command names.

use std::fmt;

use crate::error::{Result, ToolprobeError};

/// Whether executable lookup on this platform ignores case.
///
/// Windows and default macOS volumes resolve `Git` and `git` to the same
/// file, so the cache must treat them as one entry.
pub const CASE_INSENSITIVE: bool = cfg!(any(target_os = "windows", target_os = "macos"));

/// A plain executable name such as `kubectl` or `openscad-dev`.
///
/// Construction rejects anything that cannot be a bare command name, so an
/// empty string never reaches the cache masquerading as a missing tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandName {
    raw: String,
    key: String,
}

impl CommandName {
    /// Validate and wrap a command name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCommandName` when the name is empty, contains
    /// whitespace or control characters, or contains a path separator.
    pub fn parse(name: &str) -> Result<Self> {
        if let Some(reason) = invalid_reason(name) {
            return Err(ToolprobeError::InvalidCommandName {
                name: name.to_string(),
                reason: reason.to_string(),
            });
        }

        let key = if CASE_INSENSITIVE {
            name.to_lowercase()
        } else {
            name.to_string()
        };

        Ok(Self {
            raw: name.to_string(),
            key,
        })
    }

    /// The name as the caller spelled it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The normalized cache key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn invalid_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name is empty");
    }
    if name.trim().is_empty() {
        return Some("name is only whitespace");
    }
    if name.chars().any(char::is_whitespace) {
        return Some("name contains whitespace");
    }
    if name.chars().any(char::is_control) {
        return Some("name contains control characters");
    }
    if name.contains('/') || name.contains('\\') {
        return Some("name contains a path separator");
    }
    if name == "." || name == ".." {
        return Some("name is a directory reference");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_names() {
        for name in ["git", "openscad-dev", "python3.12", "7z", "dolphin_nightly"] {
            let parsed = CommandName::parse(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn rejects_empty() {
        let err = CommandName::parse("").unwrap_err();
        assert!(err.is_invalid_name());
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(CommandName::parse("   ").is_err());
        assert!(CommandName::parse("git status").is_err());
        assert!(CommandName::parse("\tgit").is_err());
    }

    #[test]
    fn rejects_control_characters() {
        assert!(CommandName::parse("git\0").is_err());
    }

    #[test]
    fn rejects_paths() {
        assert!(CommandName::parse("/usr/bin/git").is_err());
        assert!(CommandName::parse("./git").is_err());
        assert!(CommandName::parse("bin\\git.exe").is_err());
        assert!(CommandName::parse("..").is_err());
    }

    #[test]
    fn key_follows_platform_case_rules() {
        let name = CommandName::parse("KubeCtl").unwrap();
        assert_eq!(name.as_str(), "KubeCtl");
        if CASE_INSENSITIVE {
            assert_eq!(name.key(), "kubectl");
        } else {
            assert_eq!(name.key(), "KubeCtl");
        }
    }

    #[test]
    fn display_uses_original_spelling() {
        let name = CommandName::parse("Terraform").unwrap();
        assert_eq!(name.to_string(), "Terraform");
    }
}
