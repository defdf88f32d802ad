// file: src/cli/mod.rs
// version: 1.0.0
// guid: a9c4e2f7-06b8-4d53-8e1a-f3b7d0c5a296

//! Command line interface for the VxRail spec agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
