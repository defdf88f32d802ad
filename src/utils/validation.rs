// file: src/utils/validation.rs
// version: 1.0.0
// guid: 8e2b47d1-90c3-4f6a-b5d8-1a7c3e9f0d24

//! Input validation for operator-supplied network values.
//!
//! Every validator is a pure function from the raw text typed by the operator to
//! either a typed value or a [`ValidationError`]. The interactive driver in
//! [`crate::prompt`] calls them repeatedly until one succeeds, so nothing here
//! touches standard input or output.

use ipnetwork::Ipv4Network;
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Lowest usable 802.1Q VLAN ID
pub const VLAN_MIN: u16 = 1;
/// Highest usable 802.1Q VLAN ID
pub const VLAN_MAX: u16 = 4094;

/// Recoverable input errors, reported and then re-prompted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A value is required")]
    Empty,

    #[error("Invalid VLAN ID '{0}', expected a number between 1 and 4094")]
    InvalidVlan(String),

    #[error("Invalid IPv4 address '{0}'")]
    InvalidIpv4(String),

    #[error("Invalid CIDR '{0}', expected network address/prefix (e.g. 172.18.60.0/24)")]
    InvalidCidr(String),

    #[error("Invalid IP range '{0}', expected start-end (e.g. 172.18.60.55-172.18.60.60)")]
    InvalidRange(String),

    #[error("IP pool range ips are not in the same network {0}")]
    RangeOutsideNetwork(Ipv4Network),

    #[error(
        "Number of ips from ip range {range} is {count} but required minimum {required} ips to match with number of hosts"
    )]
    InsufficientAddresses {
        range: String,
        count: u64,
        required: usize,
    },

    #[error("Invalid choice '{value}', expected one of: {allowed}")]
    InvalidChoice { value: String, allowed: String },

    #[error("Invalid host '{0}', expected an IPv4 address or DNS name")]
    InvalidHost(String),
}

/// Parse a VLAN ID in the inclusive range 1..=4094
pub fn parse_vlan_id(input: &str) -> Result<u16, ValidationError> {
    let trimmed = non_empty(input)?;
    match trimmed.parse::<u16>() {
        Ok(vlan) if (VLAN_MIN..=VLAN_MAX).contains(&vlan) => Ok(vlan),
        _ => Err(ValidationError::InvalidVlan(trimmed.to_string())),
    }
}

/// Parse a dotted-quad IPv4 literal
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, ValidationError> {
    let trimmed = non_empty(input)?;
    Ipv4Addr::from_str(trimmed).map_err(|_| ValidationError::InvalidIpv4(trimmed.to_string()))
}

/// Parse an IPv4 network literal.
///
/// The prefix is mandatory and the address must be the network address itself,
/// so `172.18.60.5/24` is rejected while `172.18.60.0/24` is accepted.
pub fn parse_cidr(input: &str) -> Result<Ipv4Network, ValidationError> {
    let trimmed = non_empty(input)?;
    let invalid = || ValidationError::InvalidCidr(trimmed.to_string());

    if !trimmed.contains('/') {
        return Err(invalid());
    }

    let network = Ipv4Network::from_str(trimmed).map_err(|_| invalid())?;
    if network.ip() != network.network() {
        return Err(invalid());
    }

    Ok(network)
}

/// Select one value out of a fixed set
pub fn parse_choice<'a>(input: &str, allowed: &[&'a str]) -> Result<&'a str, ValidationError> {
    let trimmed = non_empty(input)?;
    allowed
        .iter()
        .find(|candidate| **candidate == trimmed)
        .copied()
        .ok_or_else(|| ValidationError::InvalidChoice {
            value: trimmed.to_string(),
            allowed: allowed.join(", "),
        })
}

/// `yes` or `y` in any case; everything else is a no
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Reject anything that is not an IPv4 literal or an RFC 1123 DNS name.
///
/// Hosts end up inside `bash -c` strings, so this is the only gate between
/// operator input and the shell.
pub fn validate_host(input: &str) -> Result<&str, ValidationError> {
    let host = non_empty(input)?;

    if Ipv4Addr::from_str(host).is_ok() {
        return Ok(host);
    }

    static LABEL: OnceLock<Regex> = OnceLock::new();
    let label = LABEL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?$").expect("Invalid hostname regex")
    });

    let name = host.strip_suffix('.').unwrap_or(host);
    if name.is_empty() || name.len() > 253 || !name.split('.').all(|part| label.is_match(part)) {
        return Err(ValidationError::InvalidHost(host.to_string()));
    }

    Ok(host)
}

/// Inclusive IPv4 address range typed as `start-end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpRange {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl IpRange {
    /// Number of addresses covered, both ends included
    pub fn address_count(&self) -> u64 {
        u64::from(u32::from(self.end)) - u64::from(u32::from(self.start)) + 1
    }

    /// Check that the range holds at least one address per host
    pub fn check_count(&self, host_count: usize) -> Result<(), ValidationError> {
        let count = self.address_count();
        if count < host_count as u64 {
            return Err(ValidationError::InsufficientAddresses {
                range: self.to_string(),
                count,
                required: host_count,
            });
        }

        Ok(())
    }

    /// Check that the range can serve as the IP pool for `host_count` hosts in `network`
    pub fn check_pool(&self, network: &Ipv4Network, host_count: usize) -> Result<(), ValidationError> {
        if !network.contains(self.start) || !network.contains(self.end) {
            return Err(ValidationError::RangeOutsideNetwork(*network));
        }

        self.check_count(host_count)
    }
}

impl FromStr for IpRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = non_empty(s)?;
        let invalid = || ValidationError::InvalidRange(trimmed.to_string());

        let (start, end) = trimmed.split_once('-').ok_or_else(invalid)?;
        let start = Ipv4Addr::from_str(start.trim()).map_err(|_| invalid())?;
        let end = Ipv4Addr::from_str(end.trim()).map_err(|_| invalid())?;

        if end < start {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn non_empty(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Empty)
    } else {
        Ok(trimmed)
    }
}
