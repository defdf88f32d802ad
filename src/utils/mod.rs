// file: src/utils/mod.rs
// version: 1.0.0
// guid: b7f3e0a9-2d5c-4816-9c4b-e1a8d6f2c039

//! Utility modules for validation and system checks

pub mod system;
pub mod validation;

pub use system::SystemUtils;
pub use validation::{IpRange, ValidationError};
