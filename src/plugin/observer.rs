//! Dispatch observation.
//!
//! The registry reports every dispatch to a `DispatchObserver` instead of
//! writing to the console.

use crate::core::{now, Timestamp};
use crate::plugin::args::PluginArgs;
use serde::Serialize;
use std::sync::RwLock;

/// A plugin is about to run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DispatchEvent {
    /// Registered name of the plugin
    pub plugin: String,
    /// Number of positional arguments
    pub positional: usize,
    /// Number of keyword arguments
    pub keyword: usize,
    /// When dispatch started
    pub at: Timestamp,
}

impl DispatchEvent {
    /// Create an event for a dispatch.
    pub fn new(plugin: &str, args: &PluginArgs) -> Self {
        Self {
            plugin: plugin.to_string(),
            positional: args.positional.len(),
            keyword: args.keyword.len(),
            at: now(),
        }
    }
}

/// Receives dispatch notifications.
pub trait DispatchObserver: Send + Sync {
    /// Called once per dispatch, before the plugin executes.
    fn on_dispatch(&self, event: &DispatchEvent);
}

impl<F> DispatchObserver for F
where
    F: Fn(&DispatchEvent) + Send + Sync,
{
    fn on_dispatch(&self, event: &DispatchEvent) {
        self(event)
    }
}

/// Emits a `tracing` event per dispatch. Used by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn on_dispatch(&self, event: &DispatchEvent) {
        tracing::info!(
            plugin = %event.plugin,
            positional = event.positional,
            keyword = event.keyword,
            "Running plugin"
        );
    }
}

/// Discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {
    fn on_dispatch(&self, _event: &DispatchEvent) {}
}

/// Buffers events in memory for inspection.
pub struct RecordingObserver {
    /// Recorded events
    events: RwLock<Vec<DispatchEvent>>,
    /// Maximum buffer size
    max_buffer: usize,
}

impl RecordingObserver {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Create a recorder keeping at most `max_buffer` events.
    pub fn with_capacity(max_buffer: usize) -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            max_buffer,
        }
    }

    /// Get recorded events.
    pub fn events(&self) -> Vec<DispatchEvent> {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Get recorded plugin names, oldest first.
    pub fn plugin_names(&self) -> Vec<String> {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|e| e.plugin.clone())
            .collect()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.events
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchObserver for RecordingObserver {
    fn on_dispatch(&self, event: &DispatchEvent) {
        if self.max_buffer == 0 {
            return;
        }
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        if events.len() >= self.max_buffer {
            events.remove(0);
        }
        events.push(event.clone());
    }
}
