//! Process execution.

use crate::error::{BrewMenuError, Result};
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout and stderr (if false, both are inherited from the parent).
    pub capture_output: bool,
}

impl CommandOptions {
    /// Options that capture stdout and stderr.
    ///
    /// Used while a spinner owns the terminal.
    pub fn captured() -> Self {
        Self {
            capture_output: true,
        }
    }
}

/// Run `program` with `args`, without going through a shell.
///
/// Stdin is always inherited so the user can answer the package manager's
/// prompts.
pub fn run<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    spawn(cmd, &display_command(program, args), options)
}

/// Run a command line through `/bin/bash -c`.
///
/// Used for remote install scripts, which rely on shell expansion.
pub fn run_shell(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(shell_program());
    cmd.arg("-c").arg(command);
    spawn(cmd, command, options)
}

fn spawn(mut cmd: Command, command_line: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    if options.capture_output {
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
    }
    cmd.stdin(Stdio::inherit());

    tracing::debug!("Running: {}", command_line);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start '{}': {}", command_line, e);
        BrewMenuError::CommandFailed {
            command: command_line.to_string(),
            code: None,
        }
    })?;

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        command_line,
        output.status.code(),
        start.elapsed()
    );

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}

/// Render a program and its arguments for logs and error messages.
pub fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(
        args.iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

fn shell_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "bash"
    } else {
        "/bin/bash"
    }
}
