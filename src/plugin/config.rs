//! Registry configuration.

use crate::core::Result;
use serde::{Deserialize, Serialize};

/// What `register` does when the name is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Replace the existing plugin; the name keeps its listing position
    #[default]
    Overwrite,
    /// Fail with `Error::AlreadyRegistered`
    Reject,
}

/// Plugin registry configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Duplicate name handling
    pub on_duplicate: DuplicatePolicy,
    /// Emit a debug event for each registration
    pub log_registrations: bool,
}

impl RegistryConfig {
    /// Config that rejects duplicate names.
    pub fn strict() -> Self {
        Self {
            on_duplicate: DuplicatePolicy::Reject,
            ..Default::default()
        }
    }

    /// Set duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.on_duplicate = policy;
        self
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            on_duplicate: DuplicatePolicy::Overwrite,
            log_registrations: true,
        }
    }
}
