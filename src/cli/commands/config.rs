//! Config command implementation.
//!
//! The `toolprobe config` command shows resolved configuration.

use crate::cli::args::ConfigArgs;
use crate::error::{Result, ToolprobeError};
use crate::session::Session;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    session: &'a Session,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(session: &'a Session, args: ConfigArgs) -> Self {
        Self { session, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.session.config();

        if self.args.json {
            let json = serde_json::to_string_pretty(config)
                .map_err(|e| ToolprobeError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(config)
                .map_err(|e| ToolprobeError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}
