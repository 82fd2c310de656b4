//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command borrows the same
//! [`Session`](crate::session::Session), so `check`, `which`, and `run`
//! share one availability cache and one set of warnings. The `shell`
//! command reuses the same helpers line by line.

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod list;
pub mod run;
pub mod shell;
pub mod which;

pub use check::{check_tools, report_tools, CheckSummary, ToolReport};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use shell::{ShellAction, ShellSession};
