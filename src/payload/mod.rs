// file: src/payload/mod.rs
// version: 1.0.0
// guid: 9b40f7e2-58ad-4c61-b3e9-0e6d2a5f8c17

//! Request payload module for VxRail Manager deployment
//!
//! Typed, serde-serializable counterparts of the JSON objects the manager API
//! expects, plus the interactive assembler that fills them in.

pub mod assembler;
pub mod credential;
pub mod network;
pub mod nic;
pub mod spec;

pub use assembler::{NetworkInputs, PayloadAssembler};
pub use credential::{to_credential_obj, Credential, CredentialType, Credentials};
pub use network::{to_network_obj, ExistingNetwork, IpPool, NetworkConfig, NetworkType};
pub use nic::NicProfile;
pub use spec::VxRailManagerSpec;
