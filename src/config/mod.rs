//! Generator configuration.
//!
//! This module defines the `GeneratorConfig` struct that holds the endpoints,
//! paths and default agents injected into generated commands. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), defaults for
//! every field, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::GeneratorConfig;
