// file: src/payload/spec.rs
// version: 1.0.0
// guid: e1b5a8d4-3c62-4f9e-8d07-25c9f6a1b843

//! Assembled VxRail Manager request fragment

use super::{Credentials, NetworkConfig, NicProfile};
use serde::{Deserialize, Serialize};

/// Everything collected for one VxRail Manager, ready to embed in a
/// workload domain or cluster creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxRailManagerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_thumbprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_thumbprint: Option<String>,
    #[serde(flatten)]
    pub credentials: Credentials,
    pub networks: Vec<NetworkConfig>,
    pub nic_profile: NicProfile,
}

impl VxRailManagerSpec {
    /// Render as JSON, pretty-printed unless `compact`
    pub fn to_json(&self, compact: bool) -> crate::Result<String> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}
