// file: src/lib.rs
// version: 1.0.0
// guid: 62d8b0f5-e3a7-4c19-b5d4-8a1f7c9e0b36

//! # VxRail Spec Agent
//!
//! Interactive collector for the VxRail Manager part of a VMware Cloud
//! Foundation workload domain or cluster request. It prompts for the manager's
//! root and admin credentials, the vMotion, vSAN and management networks and a
//! NIC profile, validates every answer, optionally fetches the manager's SSH
//! and SSL fingerprints, and emits the result as JSON.

pub mod cli;
pub mod error;
pub mod logging;
pub mod network;
pub mod payload;
pub mod prompt;
pub mod utils;

pub use error::{AgentError, Result};
