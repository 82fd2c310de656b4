//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// toolprobe - Cached tool availability checks for shell wrappers.
#[derive(Debug, Parser)]
#[command(name = "toolprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.toolprobe/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Package manager named in install hints
    #[arg(long, global = true, env = "TOOLPROBE_PACKAGE_MANAGER")]
    pub package_manager: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether tools are installed
    Check(CheckArgs),

    /// Show which binary a tool resolves to
    Which(WhichArgs),

    /// Run a tool, forwarding arguments unchanged
    Run(RunArgs),

    /// List known tools
    List(ListArgs),

    /// Start a long-lived session reading commands from stdin
    Shell(ShellArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Tools to check
    #[arg(required = true)]
    pub tools: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `which` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WhichArgs {
    /// Tool to resolve
    pub tool: String,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Tool to run
    pub tool: String,

    /// Arguments passed to the tool unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Show a single tool
    pub tool: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `shell` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShellArgs {
    /// Prompt shown before each command (only on a terminal)
    #[arg(long, default_value = "toolprobe> ")]
    pub prompt: String,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_multiple_tools() {
        let cli = Cli::parse_from(["toolprobe", "check", "git", "kubectl", "--json"]);
        let Commands::Check(args) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.tools, vec!["git", "kubectl"]);
        assert!(args.json);
    }

    #[test]
    fn run_keeps_hyphenated_args() {
        let cli = Cli::parse_from([
            "toolprobe",
            "run",
            "kubectl",
            "get",
            "pods",
            "-A",
            "--watch",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.tool, "kubectl");
        assert_eq!(args.args, vec!["get", "pods", "-A", "--watch"]);
    }

    #[test]
    fn run_accepts_double_dash() {
        let cli = Cli::parse_from(["toolprobe", "run", "git", "--", "log", "--oneline"]);
        let Commands::Run(args) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.args, vec!["log", "--oneline"]);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from([
            "toolprobe",
            "check",
            "go",
            "--package-manager",
            "winget",
            "--quiet",
        ]);
        assert_eq!(cli.package_manager.as_deref(), Some("winget"));
        assert!(cli.quiet);
    }

    #[test]
    fn check_requires_a_tool() {
        assert!(Cli::try_parse_from(["toolprobe", "check"]).is_err());
    }

    #[test]
    fn shell_has_default_prompt() {
        let cli = Cli::parse_from(["toolprobe", "shell"]);
        let Commands::Shell(args) = cli.command else {
            panic!("Expected Shell command");
        };
        assert_eq!(args.prompt, "toolprobe> ");
    }
}
