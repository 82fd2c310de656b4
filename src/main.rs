//! toolprobe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use toolprobe::cli::{Cli, CommandDispatcher};
use toolprobe::config::load_config;
use toolprobe::session::Session;
use toolprobe::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never mix with forwarded tool output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolprobe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolprobe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolprobe starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Explicit flags win over the config default
    let flag_mode = if cli.quiet {
        Some(OutputMode::Quiet)
    } else if cli.verbose {
        Some(OutputMode::Verbose)
    } else {
        None
    };

    let mut ui = create_ui(flag_mode.unwrap_or_default());

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(2);
        }
    };

    if let Some(package_manager) = &cli.package_manager {
        config.package_manager = package_manager.clone();
    }

    if flag_mode.is_none() {
        ui.set_output_mode(config.settings.default_output.into());
    }

    let session = match Session::bootstrap(config) {
        Ok(session) => session,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(2);
        }
    };

    // Dispatch command
    let dispatcher = CommandDispatcher::new(&session);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
