//! # plugrun - Named Plugin Registry
//!
//! Register plugins under unique names and dispatch calls to them by name:
//! - **Plugin**: trait with a single `execute` capability
//! - **Registry**: name to plugin mapping, listed in insertion order
//! - **Observer**: injectable hook notified on every dispatch
//!
//! ## Quick Start
//!
//! ```rust
//! use plugrun::plugin::{PluginRegistry, ReverseStringPlugin};
//! use plugrun::plugin_args;
//!
//! let mut registry = PluginRegistry::new();
//! registry.register("reverse_string", ReverseStringPlugin).unwrap();
//!
//! let output = registry.run("reverse_string", &plugin_args!["Python"]).unwrap();
//! assert_eq!(output, "Reversed string: nohtyP");
//! ```

pub mod core;
pub mod monitoring;
pub mod plugin;

pub use crate::core::error::{Error, Result};
pub use crate::plugin::{Plugin, PluginArgs, PluginRegistry};
