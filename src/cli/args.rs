// file: src/cli/args.rs
// version: 1.0.0
// guid: 83e1d7a5-c40f-4b96-9d2e-5a7c0f3b8e14

//! Command line argument definitions

use crate::payload::ExistingNetwork;
use crate::utils::validation::{parse_cidr, parse_vlan_id};
use clap::{Parser, Subcommand};
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;

#[derive(Parser, Debug)]
#[command(name = "vxrail-spec-agent")]
#[command(about = "Collect VxRail Manager credentials, networks and NIC profile into a request payload")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively collect a VxRail Manager spec and print it as JSON
    Collect(CollectArgs),

    /// Print the SSH host key and TLS certificate fingerprints of a host
    Fingerprint {
        #[arg(long, env = "VXRAIL_FQDN", help = "VxRail Manager FQDN or IP address")]
        host: String,

        #[arg(short, long)]
        json: bool,
    },

    /// Ping a host once and fail if it does not answer
    CheckReachability {
        #[arg(long, env = "VXRAIL_FQDN", help = "VxRail Manager FQDN or IP address")]
        host: String,
    },

    /// Check that the external tools used by the agent are installed
    CheckPrereqs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CollectArgs {
    #[arg(
        long,
        env = "VXRAIL_HOST_COUNT",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Number of hosts the IP pools must cover"
    )]
    pub host_count: u16,

    #[arg(long, help = "Also collect a vSAN network")]
    pub vsan: bool,

    #[arg(long, env = "VXRAIL_FQDN", help = "VxRail Manager FQDN or IP address")]
    pub fqdn: Option<String>,

    #[arg(long, requires = "fqdn", help = "Do not fetch SSH/SSL fingerprints")]
    pub skip_fingerprints: bool,

    #[arg(
        long,
        value_parser = vlan_arg,
        requires_all = ["mgmt_subnet", "mgmt_mask", "mgmt_gateway"],
        help = "VLAN ID of an existing management network"
    )]
    pub mgmt_vlan: Option<u16>,

    #[arg(long, value_parser = cidr_arg, requires = "mgmt_vlan")]
    pub mgmt_subnet: Option<Ipv4Network>,

    #[arg(long, requires = "mgmt_vlan")]
    pub mgmt_mask: Option<Ipv4Addr>,

    #[arg(long, requires = "mgmt_vlan")]
    pub mgmt_gateway: Option<Ipv4Addr>,

    #[arg(long, help = "Print the payload on a single line")]
    pub compact: bool,
}

impl CollectArgs {
    /// The management network given with the `--mgmt-*` options, if complete
    pub fn existing_mgmt_network(&self) -> Option<ExistingNetwork> {
        Some(ExistingNetwork {
            vlan_id: self.mgmt_vlan?,
            subnet: self.mgmt_subnet?,
            mask: self.mgmt_mask?,
            gateway: self.mgmt_gateway?,
        })
    }
}

fn vlan_arg(value: &str) -> Result<u16, String> {
    parse_vlan_id(value).map_err(|e| e.to_string())
}

fn cidr_arg(value: &str) -> Result<Ipv4Network, String> {
    parse_cidr(value).map_err(|e| e.to_string())
}
