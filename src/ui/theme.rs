//! Visual theme and styling.

use console::Style;

/// Terminal styles for toolprobe output.
#[derive(Debug, Clone)]
pub struct ToolprobeTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text such as tool names (bold).
    pub highlight: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for ToolprobeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolprobeTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            hint: Style::new(),
        }
    }

    /// The default theme on a color terminal, otherwise the plain one.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(format!("→ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
