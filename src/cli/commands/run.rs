//! Run command implementation.
//!
//! The `toolprobe run` command forwards arguments to a wrapped tool.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::session::Session;
use crate::shell::EXIT_NOT_FOUND;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Run `tool` with `args`, or warn once and report 127 when it is missing.
pub fn run_tool(
    session: &Session,
    tool: &str,
    args: &[String],
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let wrapper = session.wrapper(tool)?;
    match wrapper.invoke(args, ui)? {
        Some(code) => Ok(CommandResult::from_exit_code(code)),
        None => Ok(CommandResult::failure(EXIT_NOT_FOUND)),
    }
}

/// The run command implementation.
pub struct RunCommand<'a> {
    session: &'a Session,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(session: &'a Session, args: RunArgs) -> Self {
        Self { session, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        run_tool(self.session, &self.args.tool, &self.args.args, ui)
    }
}
