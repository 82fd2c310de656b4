//! Forwarding execution of wrapped tools.

use crate::error::{Result, ToolprobeError};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Exit code reported when a wrapped tool is not installed.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Run `program` with `args` unchanged, inheriting stdio.
///
/// Returns the child's exit code. A child killed by a signal reports
/// `128 + signal` on Unix, like a shell does.
///
/// # Errors
///
/// Returns `CommandFailed` when the process can't be started.
pub fn forward(program: &Path, args: &[String]) -> Result<i32> {
    tracing::debug!("Forwarding to {}", display_command(program, args));

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            tracing::debug!("Failed to spawn {}: {}", program.display(), e);
            ToolprobeError::CommandFailed {
                command: display_command(program, args),
                code: None,
            }
        })?;

    let code = exit_code(status);
    tracing::debug!("{} exited with {}", program.display(), code);
    Ok(code)
}

/// Render a program and its arguments for logs and error messages.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        if arg.is_empty() || arg.chars().any(char::is_whitespace) {
            rendered.push_str(&format!("{:?}", arg));
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn sh(script: &str) -> i32 {
        let args = ["-c".to_string(), script.to_string()];
        forward(Path::new("/bin/sh"), &args).unwrap()
    }

    #[test]
    fn display_command_quotes_when_needed() {
        let args = [
            "get".to_string(),
            "pods".to_string(),
            "a b".to_string(),
            String::new(),
        ];
        let rendered = display_command(Path::new("kubectl"), &args);
        assert_eq!(rendered, "kubectl get pods \"a b\" \"\"");
    }

    #[test]
    fn forward_missing_program_is_command_failed() {
        let missing = Path::new("/nonexistent/toolprobe-test-binary");
        let err = forward(missing, &[]).unwrap_err();
        assert!(matches!(err, ToolprobeError::CommandFailed { code: None, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn forward_returns_child_exit_code() {
        assert_eq!(sh("exit 0"), 0);
        assert_eq!(sh("exit 3"), 3);
    }

    #[cfg(unix)]
    #[test]
    fn forward_reports_signal_as_128_plus() {
        assert_eq!(sh("kill -9 $$"), 137);
    }

    #[cfg(unix)]
    #[test]
    fn forward_passes_args_unchanged() {
        let shell = Path::new("/bin/sh");
        let args = vec![
            "-c".to_string(),
            "[ \"$1\" = \"two words\" ] && [ \"$2\" = \"--flag\" ]".to_string(),
            "sh".to_string(),
            "two words".to_string(),
            "--flag".to_string(),
        ];
        assert_eq!(forward(shell, &args).unwrap(), 0);
    }
}
