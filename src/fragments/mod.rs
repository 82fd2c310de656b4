//! Tool fragments and their wrappers.
//!
//! # Modules
//!
//! - [`registry`] - Fragment definitions, built-ins, and config merging
//! - [`wrapper`] - Ordered candidate lookup and argument forwarding

pub mod registry;
pub mod wrapper;

pub use registry::{Fragment, FragmentRegistry};
pub use wrapper::ToolWrapper;
