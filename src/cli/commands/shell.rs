//! Shell command implementation.
//!
//! The `toolprobe shell` command reads commands line by line against one
//! long-lived session, so availability answers and missing-tool warnings
//! carry over from one line to the next.

use std::io::{BufRead, IsTerminal, Write};

use crate::cli::args::ShellArgs;
use crate::error::Result;
use crate::session::Session;
use crate::ui::{hints, UserInterface};

use super::check::check_tools;
use super::dispatcher::{Command, CommandResult};
use super::run::run_tool;
use super::which::which_tool;

/// What the loop does after one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Exit,
}

/// A line-oriented session over a [`Session`].
pub struct ShellSession<'a> {
    session: &'a Session,
    last_status: i32,
}

impl<'a> ShellSession<'a> {
    /// Start a session.
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            last_status: 0,
        }
    }

    /// Exit code of the most recent line.
    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Read lines from `input` until EOF or `exit`.
    ///
    /// Errors from a single line are reported and the loop keeps going.
    /// Returns the exit code of the last line.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        prompt: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<i32> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                let mut out = std::io::stdout();
                write!(out, "{}", prompt)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line, ui) {
                Ok(ShellAction::Continue) => {}
                Ok(ShellAction::Exit) => break,
                Err(e) => {
                    ui.error(&format!("Error: {}", e));
                    self.last_status = 1;
                }
            }
        }
        Ok(self.last_status)
    }

    /// Execute one line.
    pub fn execute_line(&mut self, line: &str, ui: &mut dyn UserInterface) -> Result<ShellAction> {
        let words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some((command, args)) = words.split_first() else {
            return Ok(ShellAction::Continue);
        };
        if command.starts_with('#') {
            return Ok(ShellAction::Continue);
        }
        tracing::debug!("shell: {} {:?}", command, args);

        self.last_status = match command.as_str() {
            "check" => {
                if args.is_empty() {
                    return self.usage("check <tool>...", ui);
                }
                let summary = check_tools(self.session, args, ui)?;
                if !summary.warned.is_empty() && ui.is_interactive() {
                    ui.show_hint(hints::after_install());
                }
                if summary.all_available() {
                    0
                } else {
                    1
                }
            }
            "which" => match args {
                [tool] => which_tool(self.session, tool, ui)?.exit_code,
                _ => return self.usage("which <tool>", ui),
            },
            "run" => match args.split_first() {
                Some((tool, rest)) => run_tool(self.session, tool, rest, ui)?.exit_code,
                None => return self.usage("run <tool> [args...]", ui),
            },
            "rehash" => {
                self.rehash(args, ui)?;
                0
            }
            "reset-warnings" => {
                self.reset_warnings(args, ui)?;
                0
            }
            "help" => {
                ui.message(hints::shell_help());
                0
            }
            "exit" | "quit" => return Ok(ShellAction::Exit),
            other => {
                ui.error(&format!("Unknown command: {}", other));
                ui.show_hint("Type `help` for the list of commands.");
                2
            }
        };
        Ok(ShellAction::Continue)
    }

    /// Forget cached lookups for every candidate of each tool, or for all
    /// tools when none are named.
    fn rehash(&self, tools: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        let resolver = self.session.resolver();
        if tools.is_empty() {
            resolver.invalidate_all();
            ui.success(&hints::after_rehash(None));
        }
        for tool in tools {
            for candidate in &self.session.registry().resolve(tool)?.candidates {
                resolver.invalidate(candidate)?;
            }
            ui.success(&hints::after_rehash(Some(tool)));
        }
        Ok(())
    }

    /// Re-arm warnings for every candidate of each tool, or for all tools.
    fn reset_warnings(&self, tools: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        let resolver = self.session.resolver();
        if tools.is_empty() {
            resolver.reset_all_warnings();
            ui.success(&hints::after_reset_warnings(None));
        }
        for tool in tools {
            for candidate in &self.session.registry().resolve(tool)?.candidates {
                resolver.reset_warnings(candidate)?;
            }
            ui.success(&hints::after_reset_warnings(Some(tool)));
        }
        Ok(())
    }

    fn usage(&mut self, usage: &str, ui: &mut dyn UserInterface) -> Result<ShellAction> {
        ui.error(&format!("Usage: {}", usage));
        self.last_status = 2;
        Ok(ShellAction::Continue)
    }
}

/// The shell command implementation.
pub struct ShellCommand<'a> {
    session: &'a Session,
    args: ShellArgs,
}

impl<'a> ShellCommand<'a> {
    /// Create a new shell command.
    pub fn new(session: &'a Session, args: ShellArgs) -> Self {
        Self { session, args }
    }
}

impl Command for ShellCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stdin = std::io::stdin();
        let prompt = if stdin.is_terminal() {
            Some(self.args.prompt.as_str())
        } else {
            None
        };

        let mut shell = ShellSession::new(self.session);
        let code = shell.run(stdin.lock(), prompt, ui)?;
        Ok(CommandResult::from_exit_code(code))
    }
}
