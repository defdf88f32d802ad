// file: src/network/reachability.rs
// version: 1.0.0
// guid: 4b9f6e28-0a1d-47c3-92e5-d83c7b1a6f04

//! Single-shot ICMP preflight against the VxRail Manager

use super::executor::{CommandExecutor, LocalClient};
use crate::utils::validation::validate_host;
use crate::{AgentError, Result};
use tracing::{info, warn};

/// Seconds `ping` waits for the one echo reply
pub const PING_TIMEOUT_SECS: u32 = 2;

/// Pings a host once; any nonzero `ping` exit counts as unreachable
pub struct ReachabilityChecker<E = LocalClient> {
    executor: E,
}

impl ReachabilityChecker<LocalClient> {
    pub fn new() -> Self {
        Self::with_executor(LocalClient::new())
    }
}

impl Default for ReachabilityChecker<LocalClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> ReachabilityChecker<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Fail with [`AgentError::Unreachable`] unless the host answers one ping
    pub fn check_reachability(&self, host: &str) -> Result<()> {
        let host = validate_host(host)?;
        let command = ping_command(host);

        if self.executor.check_silent(&command)? {
            info!("{} is reachable", host);
            Ok(())
        } else {
            warn!("{} did not answer ping", host);
            Err(AgentError::Unreachable {
                host: host.to_string(),
            })
        }
    }
}

pub fn ping_command(host: &str) -> String {
    format!("ping -c 1 -W {} {} > /dev/null 2>&1", PING_TIMEOUT_SECS, host)
}
