//! Error types for plugrun.

use crate::plugin::interface::PluginError;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry operations.
#[derive(Error, Debug)]
pub enum Error {
    // Registration errors
    #[error("Plugin name is invalid: {0:?}")]
    InvalidName(String),

    #[error("Plugin {0} is already registered")]
    AlreadyRegistered(String),

    // Dispatch errors
    #[error("No plugin registered with name: {0}")]
    NotFound(String),

    /// Raised by the plugin itself; surfaced unchanged.
    #[error(transparent)]
    Plugin(#[from] PluginError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl Error {
    /// Whether the error originated inside a plugin's `execute`.
    pub fn is_plugin_error(&self) -> bool {
        matches!(self, Error::Plugin(_))
    }
}
