//! List command implementation.
//!
//! The `toolprobe list` command lists known tools. It never probes.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{Result, ToolprobeError};
use crate::fragments::Fragment;
use crate::session::Session;
use crate::ui::theme::ToolprobeTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// A fragment with its install hint resolved for the session.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    candidates: &'a [String],
    install_hint: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
}

impl<'a> ListEntry<'a> {
    fn new(fragment: &'a Fragment, package_manager: &str) -> Self {
        Self {
            name: &fragment.name,
            candidates: &fragment.candidates,
            install_hint: fragment.install_hint(package_manager),
            description: &fragment.description,
        }
    }
}

/// The list command implementation.
pub struct ListCommand<'a> {
    session: &'a Session,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(session: &'a Session, args: ListArgs) -> Self {
        Self { session, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn entries(&self) -> Result<Vec<ListEntry<'a>>> {
        let registry = self.session.registry();
        let package_manager = &self.session.config().package_manager;
        match &self.args.tool {
            Some(tool) => {
                let fragment = registry.require(tool)?;
                Ok(vec![ListEntry::new(fragment, package_manager)])
            }
            None => Ok(registry
                .iter()
                .map(|f| ListEntry::new(f, package_manager))
                .collect()),
        }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.entries()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| ToolprobeError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = ToolprobeTheme::detect();
        for entry in &entries {
            let plain = entry.candidates.len() == 1 && entry.candidates[0] == entry.name;
            let candidates = if !plain {
                format!(" {}", theme.dim.apply_to(entry.candidates.join(" → ")))
            } else {
                String::new()
            };
            ui.message(&format!(
                "  {}{}",
                theme.highlight.apply_to(entry.name),
                candidates
            ));
            if !entry.description.is_empty() {
                ui.message(&format!("    {}", theme.dim.apply_to(entry.description)));
            }
            if self.args.tool.is_some() || ui.output_mode().shows_details() {
                ui.message(&format!("    install: {}", entry.install_hint));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ToolConfig, ToolprobeConfig};
    use crate::resolver::MockProbe;
    use crate::ui::MockUI;

    fn session() -> (MockProbe, Session) {
        let mut config = ToolprobeConfig {
            package_manager: "scoop".to_string(),
            ..Default::default()
        };
        config.tools.insert(
            "bd".to_string(),
            ToolConfig {
                install_hint: Some("go install example.com/bd@latest".to_string()),
                ..Default::default()
            },
        );
        let probe = MockProbe::new();
        let session = Session::with_probe(config, probe.clone()).unwrap();
        (probe, session)
    }

    #[test]
    fn lists_builtins_without_probing() {
        let (probe, session) = session();
        let cmd = ListCommand::new(&session, ListArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.has_message("kubectl"));
        assert!(ui.has_message("openscad-dev → openscad"));
        assert_eq!(probe.total_probes(), 0);
    }

    #[test]
    fn single_tool_shows_install_hint() {
        let (_, session) = session();
        let cmd = ListCommand::new(
            &session,
            ListArgs {
                tool: Some("bd".to_string()),
                json: false,
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        assert!(ui.has_message("install: go install example.com/bd@latest"));
    }

    #[test]
    fn unknown_tool_is_an_error() {
        let (_, session) = session();
        let cmd = ListCommand::new(
            &session,
            ListArgs {
                tool: Some("nonexistent".to_string()),
                json: false,
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, ToolprobeError::UnknownTool { .. }));
    }

    #[test]
    fn json_includes_resolved_hint() {
        let (_, session) = session();
        let cmd = ListCommand::new(
            &session,
            ListArgs {
                tool: Some("rg".to_string()),
                json: true,
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed[0]["name"], "rg");
        assert_eq!(parsed[0]["install_hint"], "scoop install ripgrep");
        assert!(cmd.args().json);
    }
}
