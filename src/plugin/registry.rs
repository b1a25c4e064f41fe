//! Plugin registry for managing plugins.
//!
//! Handles plugin registration, listing, and dispatch by name.

use crate::core::{is_valid_name, now, Error, Result, Timestamp};
use crate::plugin::args::PluginArgs;
use crate::plugin::config::{DuplicatePolicy, RegistryConfig};
use crate::plugin::interface::{Plugin, PluginInfo, PluginOutput};
use crate::plugin::observer::{DispatchEvent, DispatchObserver, TracingObserver};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registered plugin entry.
#[derive(Clone)]
pub struct RegisteredPlugin {
    /// Plugin instance
    pub plugin: Arc<dyn Plugin>,
    /// Plugin info
    pub info: PluginInfo,
    /// Registration time
    pub registered_at: Timestamp,
}

/// Plugin registry.
///
/// Maps unique names to plugins and dispatches calls to them. Names are
/// listed in the order they were first registered.
pub struct PluginRegistry {
    /// Registered plugins
    plugins: HashMap<String, RegisteredPlugin>,
    /// Names in insertion order
    order: Vec<String>,
    /// Registry configuration
    config: RegistryConfig,
    /// Dispatch hook
    observer: Arc<dyn DispatchObserver>,
}

impl PluginRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            plugins: HashMap::new(),
            order: Vec::new(),
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the dispatch observer.
    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the dispatch observer in place.
    pub fn set_observer(&mut self, observer: Arc<dyn DispatchObserver>) {
        self.observer = observer;
    }

    /// Get the registry config.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a plugin under `name`.
    pub fn register<P>(&mut self, name: impl Into<String>, plugin: P) -> Result<()>
    where
        P: Plugin + 'static,
    {
        self.register_arc(name, Arc::new(plugin))
    }

    /// Register an already shared plugin under `name`.
    ///
    /// On failure the registry is unchanged.
    pub fn register_arc(&mut self, name: impl Into<String>, plugin: Arc<dyn Plugin>) -> Result<()> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::InvalidName(name));
        }

        let replacing = self.plugins.contains_key(&name);
        if replacing && self.config.on_duplicate == DuplicatePolicy::Reject {
            return Err(Error::AlreadyRegistered(name));
        }

        if self.config.log_registrations {
            debug!(plugin = %name, replaced = replacing, "Registered plugin");
        }

        if !replacing {
            self.order.push(name.clone());
        }
        let info = plugin.info();
        self.plugins.insert(
            name,
            RegisteredPlugin {
                plugin,
                info,
                registered_at: now(),
            },
        );

        Ok(())
    }

    /// Unregister a plugin, returning it.
    pub fn unregister(&mut self, name: &str) -> Result<Arc<dyn Plugin>> {
        let entry = self
            .plugins
            .remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        self.order.retain(|n| n != name);

        if self.config.log_registrations {
            debug!(plugin = %name, "Unregistered plugin");
        }

        Ok(entry.plugin)
    }

    /// Run a plugin by name.
    ///
    /// Errors raised by the plugin are returned unchanged as `Error::Plugin`.
    pub fn run(&self, name: &str, args: &PluginArgs) -> Result<PluginOutput> {
        let plugin = self.resolve(name)?;
        self.observer.on_dispatch(&DispatchEvent::new(name, args));
        Ok(plugin.execute(args)?)
    }

    /// Look up the plugin registered under `name`.
    pub(crate) fn resolve(&self, name: &str) -> Result<Arc<dyn Plugin>> {
        self.plugins
            .get(name)
            .map(|entry| Arc::clone(&entry.plugin))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Get the dispatch observer.
    pub(crate) fn observer(&self) -> Arc<dyn DispatchObserver> {
        Arc::clone(&self.observer)
    }

    /// List registered names in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Names with their plugin info, in insertion order.
    pub fn describe(&self) -> Vec<(String, PluginInfo)> {
        self.order
            .iter()
            .filter_map(|name| {
                self.plugins
                    .get(name)
                    .map(|entry| (name.clone(), entry.info.clone()))
            })
            .collect()
    }

    /// Get plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredPlugin> {
        self.plugins.get(name)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Get plugin count.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.order)
            .field("config", &self.config)
            .finish()
    }
}
