// file: src/payload/network.rs
// version: 1.0.0
// guid: 0d93b6e1-4a7f-4c28-b1e5-62f8a9d3c740

//! Network payload structures

use crate::utils::validation::IpRange;
use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Traffic type carried by a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkType {
    Vmotion,
    Vsan,
    Management,
}

impl NetworkType {
    /// Get the network type as it appears in the payload
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Vmotion => "VMOTION",
            NetworkType::Vsan => "VSAN",
            NetworkType::Management => "MANAGEMENT",
        }
    }

    /// Name shown to the operator
    pub fn display_name(&self) -> &'static str {
        match self {
            NetworkType::Vmotion => "vMotion",
            NetworkType::Vsan => "vSAN",
            NetworkType::Management => "Management",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addresses reserved for host assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpPool {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl From<IpRange> for IpPool {
    fn from(range: IpRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// One entry of the `networks` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    pub vlan_id: u16,
    pub mask: Ipv4Addr,
    pub gateway: Ipv4Addr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Ipv4Network>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_pools: Option<Vec<IpPool>>,
}

/// A management network already defined elsewhere (domain or primary cluster)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingNetwork {
    pub vlan_id: u16,
    pub subnet: Ipv4Network,
    pub mask: Ipv4Addr,
    pub gateway: Ipv4Addr,
}

/// Build a network object; `subnet` and `ipPools` are only set when supplied
pub fn to_network_obj(
    network_type: NetworkType,
    vlan_id: u16,
    cidr: Option<Ipv4Network>,
    mask: Ipv4Addr,
    gateway: Ipv4Addr,
    ip_range: Option<IpRange>,
) -> NetworkConfig {
    NetworkConfig {
        network_type,
        vlan_id,
        mask,
        gateway,
        subnet: cidr,
        ip_pools: ip_range.map(|range| vec![IpPool::from(range)]),
    }
}
