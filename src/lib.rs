//! toolprobe - Cached tool availability checks for shell wrappers.
//!
//! toolprobe answers "is this command installed?" once per session and
//! remembers the answer, and tells the user how to install a missing tool
//! exactly once instead of on every invocation.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`fragments`] - Tool fragments, built-ins, and wrappers
//! - [`resolver`] - Memoizing availability resolver and PATH probing
//! - [`session`] - Session bootstrap shared by every command
//! - [`shell`] - Forwarding execution of wrapped tools
//! - [`ui`] - Terminal output and message texts
//!
//! # Example
//!
//! ```
//! use toolprobe::resolver::{AvailabilityResolver, MockProbe};
//! use toolprobe::ui::MockUI;
//!
//! let probe = MockProbe::with_available(["git"]);
//! let resolver = AvailabilityResolver::new(probe.clone());
//! let mut ui = MockUI::new();
//!
//! assert!(resolver.is_available("git").unwrap());
//! assert!(!resolver.warn_if_missing("kubectl", "scoop install kubectl", &mut ui).unwrap());
//! assert!(!resolver.warn_if_missing("kubectl", "scoop install kubectl", &mut ui).unwrap());
//! assert_eq!(ui.warnings().len(), 1);
//! assert_eq!(probe.probe_count("kubectl"), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fragments;
pub mod resolver;
pub mod session;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolprobeError};
