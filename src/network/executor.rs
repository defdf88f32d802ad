// file: src/network/executor.rs
// version: 1.0.0
// guid: 7d3a1f6c-b2e8-4590-a1c7-5e9f0b4d8a62

//! Command execution trait and the local shell implementation

use crate::{AgentError, Result};
use std::process::{Command, Output};
use tracing::{debug, error};

/// Trait for running shell-interpreted commands
pub trait CommandExecutor {
    /// Execute command and hand back exit code, stdout and stderr without
    /// judging the exit code
    fn execute_with_error_collection(
        &self,
        command: &str,
        description: &str,
    ) -> Result<(i32, String, String)>;

    /// Execute a command intended as a boolean check
    fn check_silent(&self, command: &str) -> Result<bool>;
}

/// Runs commands on this machine through `bash -o pipefail -c`.
///
/// `pipefail` makes a pipeline fail when any stage fails, not only the last.
#[derive(Debug, Clone, Default)]
pub struct LocalClient;

impl LocalClient {
    /// Create a new local client
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, command: &str) -> Result<Output> {
        Command::new("bash")
            .args(["-o", "pipefail", "-c", command])
            .output()
            .map_err(|e| AgentError::ProcessError {
                command: command.to_string(),
                exit_code: None,
                stderr: format!("Failed to execute command: {}", e),
            })
    }
}

impl CommandExecutor for LocalClient {
    fn execute_with_error_collection(
        &self,
        command: &str,
        description: &str,
    ) -> Result<(i32, String, String)> {
        debug!("Executing: {} -> {}", description, command);

        let output = self.spawn(command)?;
        let exit_status = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if exit_status != 0 {
            error!("Command '{}' failed with exit code {}", description, exit_status);
            debug!("STDERR: {}", stderr);
        } else {
            debug!("Command '{}' completed successfully", description);
        }

        Ok((exit_status, stdout, stderr))
    }

    fn check_silent(&self, command: &str) -> Result<bool> {
        Ok(self.spawn(command)?.status.success())
    }
}
