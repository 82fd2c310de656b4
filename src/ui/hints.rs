//! User-facing message texts.
//!
//! Kept in one place so tests and wrappers agree on the wording.

/// Warning shown the first time a tool is found missing.
pub fn missing_tool(tool: &str, install_hint: &str) -> String {
    format!("{} not found. Install with: {}", tool, install_hint)
}

/// Hint shown after a missing-tool warning in an interactive session.
pub fn after_install() -> &'static str {
    "Installed it just now? Run `rehash` to check again."
}

/// Confirmation after cache invalidation.
pub fn after_rehash(tool: Option<&str>) -> String {
    match tool {
        Some(tool) => format!("Forgot cached lookup for {}", tool),
        None => "Forgot all cached lookups".to_string(),
    }
}

/// Confirmation after warning reset.
pub fn after_reset_warnings(tool: Option<&str>) -> String {
    match tool {
        Some(tool) => format!("Missing-tool warning for {} re-armed", tool),
        None => "All missing-tool warnings re-armed".to_string(),
    }
}

/// Help text for the interactive session.
pub fn shell_help() -> &'static str {
    "Commands: check <tool>..., which <tool>, run <tool> [args...], \
     rehash [tool...], reset-warnings [tool...], help, exit"
}
