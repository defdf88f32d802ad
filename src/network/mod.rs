// file: src/network/mod.rs
// version: 1.0.0
// guid: f2c6a9d3-71e4-4b08-a5d2-3b8e0c9f1a56

//! Network operations module

pub mod executor;
pub mod fingerprint;
pub mod reachability;

pub use executor::{CommandExecutor, LocalClient};
pub use fingerprint::{FingerprintProvider, ShellFingerprintProvider};
pub use reachability::ReachabilityChecker;
