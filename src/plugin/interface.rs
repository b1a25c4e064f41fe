//! Plugin interface definition.
//!
//! Defines the interface plugins must implement.

use crate::plugin::args::PluginArgs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value produced by a plugin.
pub type PluginOutput = serde_json::Value;

/// Result type for plugin operations.
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Plugin-specific error.
///
/// Raised from inside `Plugin::execute`. The registry never inspects or
/// rewrites these; callers of `run` see them as-is.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum PluginError {
    #[error("takes {expected} argument(s) but {got} were given")]
    Arity { expected: usize, got: usize },

    #[error("missing required argument: '{0}'")]
    MissingArgument(String),

    #[error("got an unexpected keyword argument '{0}'")]
    UnexpectedKeyword(String),

    #[error("got multiple values for argument '{0}'")]
    DuplicateArgument(String),

    #[error("argument '{name}' must be {expected}, not {found}")]
    ArgumentType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Failed(String),
}

impl PluginError {
    /// Create a generic failure.
    pub fn failed(message: impl Into<String>) -> Self {
        PluginError::Failed(message.into())
    }
}

/// Plugin information.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Description
    pub description: String,
    /// Argument synopsis, e.g. `<a> <b>`
    pub usage: String,
}

impl PluginInfo {
    /// Create new plugin info.
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            usage: String::new(),
        }
    }

    /// Set usage.
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }
}

/// Plugin trait that all plugins must implement.
///
/// A plugin exposes a single capability: execute with the supplied
/// arguments and produce a result. Implementations declare and enforce
/// their own arity and argument types.
pub trait Plugin: Send + Sync {
    /// Get plugin info.
    fn info(&self) -> PluginInfo {
        PluginInfo::default()
    }

    /// Execute the plugin.
    fn execute(&self, args: &PluginArgs) -> PluginResult<PluginOutput>;
}

impl<F> Plugin for F
where
    F: Fn(&PluginArgs) -> PluginResult<PluginOutput> + Send + Sync,
{
    fn execute(&self, args: &PluginArgs) -> PluginResult<PluginOutput> {
        self(args)
    }
}

/// Render plugin output for display.
///
/// Strings print bare; everything else prints as JSON.
pub fn render_output(output: &PluginOutput) -> String {
    match output {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct ConstPlugin;

    impl Plugin for ConstPlugin {
        fn execute(&self, _args: &PluginArgs) -> PluginResult<PluginOutput> {
            Ok(json!(42))
        }
    }

    #[test]
    fn test_plugin_info() {
        let info = PluginInfo::new("Adds numbers").with_usage("<a> <b>");

        assert_eq!(info.description, "Adds numbers");
        assert_eq!(info.usage, "<a> <b>");
    }

    #[test]
    fn test_default_info() {
        assert_eq!(ConstPlugin.info(), PluginInfo::default());
    }

    #[test]
    fn test_closure_plugin() {
        let plugin = |args: &PluginArgs| -> PluginResult<PluginOutput> { Ok(json!(args.len())) };
        let args = PluginArgs::new().arg(1).arg(2);

        assert_eq!(plugin.execute(&args).unwrap(), json!(2));
    }

    #[test]
    fn test_error_display() {
        let err = PluginError::Arity { expected: 2, got: 3 };
        assert_eq!(err.to_string(), "takes 2 argument(s) but 3 were given");

        let err = PluginError::ArgumentType {
            name: "a".to_string(),
            expected: "a number",
            found: "string",
        };
        assert_eq!(err.to_string(), "argument 'a' must be a number, not string");
    }

    #[test]
    fn test_render_output() {
        assert_eq!(render_output(&json!("Hello")), "Hello");
        assert_eq!(render_output(&json!(12)), "12");
        assert_eq!(render_output(&json!([1, 2])), "[1,2]");
    }
}
