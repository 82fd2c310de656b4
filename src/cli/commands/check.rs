//! Check command implementation.
//!
//! The `toolprobe check` command reports whether tools are installed,
//! warning once per session for each missing one.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::CheckArgs;
use crate::error::{Result, ToolprobeError};
use crate::session::Session;
use crate::ui::theme::ToolprobeTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Outcome of checking a batch of tools.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Tools with an available candidate.
    pub found: Vec<String>,
    /// Tools with no available candidate.
    pub missing: Vec<String>,
    /// Missing tools whose warning was emitted by this check.
    pub warned: Vec<String>,
}

impl CheckSummary {
    /// Whether every checked tool was found.
    pub fn all_available(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Machine-readable availability of one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    /// Tool name as requested.
    pub tool: String,
    /// Whether any candidate was found.
    pub available: bool,
    /// The candidate that was found.
    pub resolved: Option<String>,
    /// Full path of the found candidate.
    pub path: Option<PathBuf>,
    /// How to install the tool.
    pub install_hint: String,
}

/// Check `tools` against the session resolver, reporting through `ui`.
///
/// Missing tools warn once per session; a repeat check of a missing tool
/// prints nothing.
pub fn check_tools(
    session: &Session,
    tools: &[String],
    ui: &mut dyn UserInterface,
) -> Result<CheckSummary> {
    let theme = ToolprobeTheme::detect();
    let mut summary = CheckSummary::default();

    for tool in tools {
        let wrapper = session.wrapper(tool)?;
        let already_warned = session
            .resolver()
            .has_warned(wrapper.fragment().warn_name())?;
        match wrapper.ensure(ui)? {
            Some(found) => {
                if found == *tool {
                    ui.success(tool);
                } else {
                    ui.success(&format!("{} ({})", tool, found));
                }
                if ui.output_mode().shows_details() {
                    if let Some(path) = session.resolver().locate(&found)? {
                        ui.message(&format!(
                            "  {}",
                            theme.dim.apply_to(path.display().to_string())
                        ));
                    }
                }
                summary.found.push(tool.clone());
            }
            None => {
                if !already_warned {
                    summary.warned.push(tool.clone());
                }
                summary.missing.push(tool.clone());
            }
        }
    }

    Ok(summary)
}

/// Build reports for `tools` without emitting warnings.
pub fn report_tools(session: &Session, tools: &[String]) -> Result<Vec<ToolReport>> {
    tools
        .iter()
        .map(|tool| {
            let wrapper = session.wrapper(tool)?;
            let located = wrapper.locate_path()?;
            Ok(ToolReport {
                tool: tool.clone(),
                available: located.is_some(),
                resolved: located.as_ref().map(|(name, _)| name.clone()),
                path: located.and_then(|(_, path)| path),
                install_hint: wrapper.install_hint().to_string(),
            })
        })
        .collect()
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    session: &'a Session,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(session: &'a Session, args: CheckArgs) -> Self {
        Self { session, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let reports = report_tools(self.session, &self.args.tools)?;
            let json = serde_json::to_string_pretty(&reports)
                .map_err(|e| ToolprobeError::Other(e.into()))?;
            ui.message(&json);
            return Ok(if reports.iter().all(|r| r.available) {
                CommandResult::success()
            } else {
                CommandResult::failure(1)
            });
        }

        let summary = check_tools(self.session, &self.args.tools, ui)?;
        Ok(if summary.all_available() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
