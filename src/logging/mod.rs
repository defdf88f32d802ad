// file: src/logging/mod.rs
// version: 1.0.0
// guid: d6a2f8c4-93b7-4e15-8a0c-7f1e5b2d9c38

//! Logging system for the VxRail spec agent

pub mod logger;

pub use logger::{init_logger, with_operation_span};
