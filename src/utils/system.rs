// file: src/utils/system.rs
// version: 1.0.0
// guid: 1e8d5c3b-a694-4f27-b0d1-6c2f9e7a4b85

//! System utility functions

use std::path::PathBuf;
use tracing::debug;

/// External tools the fingerprint and reachability checks shell out to
pub const REQUIRED_TOOLS: [&str; 5] = ["bash", "ping", "ssh-keygen", "ssh-keyscan", "openssl"];

/// Where a required tool was found, if anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub name: &'static str,
    pub path: Option<PathBuf>,
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }
}

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Look up every tool in [`REQUIRED_TOOLS`]
    pub fn check_required_tools() -> Vec<ToolStatus> {
        REQUIRED_TOOLS
            .into_iter()
            .map(|name| {
                let path = which::which(name).ok();
                debug!("{} -> {:?}", name, path);
                ToolStatus { name, path }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_required_tools_covers_every_tool() {
        let statuses = SystemUtils::check_required_tools();

        assert_eq!(statuses.len(), REQUIRED_TOOLS.len());
        // Every other check runs through bash, so the test host has it too
        let bash = statuses.iter().find(|s| s.name == "bash").unwrap();
        assert!(bash.is_available());
        assert!(bash.path.is_some());
    }
}
