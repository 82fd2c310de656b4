//! Which command implementation.
//!
//! The `toolprobe which` command prints the binary a tool resolves to.

use crate::cli::args::WhichArgs;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Print where `tool` resolves, warning once when it is missing.
pub fn which_tool(
    session: &Session,
    tool: &str,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let wrapper = session.wrapper(tool)?;
    let Some(found) = wrapper.ensure(ui)? else {
        return Ok(CommandResult::failure(1));
    };

    match session.resolver().locate(&found)? {
        Some(path) => ui.message(&path.display().to_string()),
        None => ui.message(&found),
    }
    Ok(CommandResult::success())
}

/// The which command implementation.
pub struct WhichCommand<'a> {
    session: &'a Session,
    args: WhichArgs,
}

impl<'a> WhichCommand<'a> {
    /// Create a new which command.
    pub fn new(session: &'a Session, args: WhichArgs) -> Self {
        Self { session, args }
    }
}

impl Command for WhichCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        which_tool(self.session, &self.args.tool, ui)
    }
}
