//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, ToolprobeTheme, UserInterface};

/// Terminal UI implementation.
///
/// Status lines go to stdout. Warnings and errors go to stderr so they never
/// mix with the output of a forwarded tool or with `--json` results.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ToolprobeTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: ToolprobeTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_hint(hint)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
