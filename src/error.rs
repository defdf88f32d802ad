// file: src/error.rs
// version: 1.0.0
// guid: 3f0c9a1e-6b2d-4e57-9a18-c4d2e7f50b13

use crate::utils::validation::ValidationError;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for the VxRail spec agent
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed: {0}")]
    Prompt(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Command '{command}' failed with exit code {exit_code:?}: {stderr}")]
    ProcessError {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Fingerprint command '{command}' failed for {host}")]
    Fingerprint { command: String, host: String },

    #[error("VxRail Manager {host} is not reachable")]
    Unreachable { host: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl AgentError {
    /// Create a new prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Lines shown to the operator before the process exits
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            Self::ProcessError { command, .. } => vec![format!(
                "Error encountered when execute command locally - Command:{}",
                command
            )],
            Self::Fingerprint { command, host } => vec![
                format!(
                    "Error encountered when execute command locally - Command:{}",
                    command
                ),
                format!("Please check reachability of {}", host),
            ],
            Self::Unreachable { host } => vec![
                format!("VxRail Manager {} is not reachable", host),
                "Please make sure you have provided correct VxRail Manager and had run \
                 prerequisites of changing VxRail Manager static IP to management IP"
                    .to_string(),
            ],
            other => vec![other.to_string()],
        }
    }
}
