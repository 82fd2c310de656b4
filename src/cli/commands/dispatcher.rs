//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from a child process exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }

    /// Exit code for the process. Codes outside `0..=255` become 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    session: &'a Session,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher over one session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// The session every command shares.
    pub fn session(&self) -> &Session {
        self.session
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(self.session, args.clone());
                cmd.execute(ui)
            }
            Commands::Which(args) => {
                let cmd = super::which::WhichCommand::new(self.session, args.clone());
                cmd.execute(ui)
            }
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(self.session, args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.session, args.clone());
                cmd.execute(ui)
            }
            Commands::Shell(args) => {
                let cmd = super::shell::ShellCommand::new(self.session, args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(self.session, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
