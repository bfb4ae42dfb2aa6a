// src/system/executor.rs

use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command '{0}' could not be executed: {1}")]
    SpawnFailed(String, #[source] std::io::Error),
}

/// Exit code reported when the child was terminated without one (a signal).
/// Matches the shell convention for an interrupted process.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Runs a final command line through the platform shell with inherited
/// standard streams and returns the child's exit code.
///
/// The line is passed to the shell verbatim so pipes, redirections and
/// quoting behave exactly as they would when typed at a prompt. An empty
/// line is a success. The child runs to completion; no timeout is imposed,
/// and a non-zero exit is the caller's to report, not a failure of the tool.
pub fn execute(command_line: &str) -> Result<i32, ExecutionError> {
    let trimmed = command_line.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    log::debug!("spawning through the platform shell: {}", trimmed);
    let status = shell_command(trimmed)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ExecutionError::SpawnFailed(trimmed.to_string(), e))?;

    Ok(status.code().unwrap_or(INTERRUPTED_EXIT_CODE))
}

#[cfg(target_os = "windows")]
fn shell_command(command_line: &str) -> StdCommand {
    let mut command = StdCommand::new("cmd");
    command.arg("/C").arg(command_line);
    command
}

#[cfg(not(target_os = "windows"))]
fn shell_command(command_line: &str) -> StdCommand {
    let mut command = StdCommand::new("sh");
    command.arg("-c").arg(command_line);
    command
}
