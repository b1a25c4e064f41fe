//! Plugin Module
//!
//! Provides a named plugin registry with dynamic dispatch:
//! - Plugin interface and structured arguments
//! - Plugin registry and its thread-safe wrapper
//! - Dispatch observation
//! - Built-in sample plugins

pub mod args;
pub mod builtin;
pub mod config;
pub mod interface;
pub mod observer;
pub mod registry;
pub mod shared;

pub use args::PluginArgs;
pub use builtin::{register_builtins, AddNumbersPlugin, HelloWorldPlugin, ReverseStringPlugin};
pub use config::{DuplicatePolicy, RegistryConfig};
pub use interface::{render_output, Plugin, PluginError, PluginInfo, PluginOutput, PluginResult};
pub use observer::{DispatchEvent, DispatchObserver, NoopObserver, RecordingObserver, TracingObserver};
pub use registry::{PluginRegistry, RegisteredPlugin};
pub use shared::SharedPluginRegistry;
