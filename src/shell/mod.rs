//! Process execution for wrapped tools.

pub mod command;

pub use command::{display_command, forward, EXIT_NOT_FOUND};
