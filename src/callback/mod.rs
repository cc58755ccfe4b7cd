//! Callback command execution.
//!
//! After a successful render the spec's callback command runs through
//! `sh -c`, blocking the poll loop until it terminates. Its output is
//! captured in full and logged line-by-line, and the exit status is logged.
//! A non-zero exit is observational only: the consumer failing to reload is
//! not the daemon's failure. Only a spawn failure is an error.

use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::Command;

/// Error type for callback execution.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("failed to spawn callback command: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Run a callback command to completion and log its output and exit status.
pub async fn run(command: &str) -> Result<ExitStatus, CallbackError> {
    tracing::info!(command, "executing callback");

    // output() pipes stdout/stderr and releases the handles on every exit
    // path, including kill-on-error.
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output()
        .await?;

    for line in String::from_utf8_lossy(&output.stdout).lines() {
        tracing::debug!(stream = "stdout", line, "callback output");
    }
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        tracing::debug!(stream = "stderr", line, "callback output");
    }

    if output.status.success() {
        tracing::info!(status = %output.status, "callback finished");
    } else {
        tracing::warn!(status = %output.status, command, "callback exited non-zero");
    }

    Ok(output.status)
}
