//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`hints`] with the user-facing message texts
//!
//! # Example
//!
//! ```
//! use toolprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("kubectl not found. Install with: scoop install kubectl");
//! assert!(ui.has_warning("scoop install kubectl"));
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ToolprobeTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Errors are shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Check if attached to an interactive terminal.
    fn is_interactive(&self) -> bool;
}
