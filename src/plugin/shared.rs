//! Thread-safe registry wrapper.
//!
//! Registration takes the write lock. Dispatch holds the read lock only long
//! enough to resolve the plugin and observer; both run with no lock held, so
//! either may call back into the registry.

use crate::core::{Error, Result};
use crate::plugin::args::PluginArgs;
use crate::plugin::interface::{Plugin, PluginOutput};
use crate::plugin::observer::DispatchEvent;
use crate::plugin::registry::PluginRegistry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A `PluginRegistry` shared across threads.
#[derive(Clone, Default)]
pub struct SharedPluginRegistry {
    inner: Arc<RwLock<PluginRegistry>>,
}

impl SharedPluginRegistry {
    /// Wrap a registry.
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Create a shared registry preloaded with the sample plugins.
    pub fn with_builtins() -> Result<Self> {
        Ok(Self::new(PluginRegistry::with_builtins()?))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PluginRegistry>> {
        self.inner
            .read()
            .map_err(|_| Error::Internal("plugin registry lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PluginRegistry>> {
        self.inner
            .write()
            .map_err(|_| Error::Internal("plugin registry lock poisoned".to_string()))
    }

    /// Register a plugin under `name`.
    pub fn register<P>(&self, name: impl Into<String>, plugin: P) -> Result<()>
    where
        P: Plugin + 'static,
    {
        self.write()?.register(name, plugin)
    }

    /// Unregister a plugin, returning it.
    pub fn unregister(&self, name: &str) -> Result<Arc<dyn Plugin>> {
        self.write()?.unregister(name)
    }

    /// Run a plugin by name.
    pub fn run(&self, name: &str, args: &PluginArgs) -> Result<PluginOutput> {
        let (plugin, observer) = {
            let registry = self.read()?;
            (registry.resolve(name)?, registry.observer())
        };
        observer.on_dispatch(&DispatchEvent::new(name, args));
        Ok(plugin.execute(args)?)
    }

    /// List registered names in insertion order.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.read()?.list())
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.contains(name))
    }

    /// Get plugin count.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

impl From<PluginRegistry> for SharedPluginRegistry {
    fn from(registry: PluginRegistry) -> Self {
        Self::new(registry)
    }
}
