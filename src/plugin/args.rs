//! Structured plugin arguments.
//!
//! Carries positional and keyword arguments to a plugin and binds them to
//! named parameters the way a call site would.

use crate::plugin::interface::{PluginError, PluginResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments passed to `Plugin::execute`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginArgs {
    /// Positional arguments
    #[serde(default)]
    pub positional: Vec<Value>,
    /// Keyword arguments
    #[serde(default)]
    pub keyword: Map<String, Value>,
}

impl PluginArgs {
    /// Create empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument.
    pub fn kwarg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.to_string(), value.into());
        self
    }

    /// Parse command-line words into positional arguments.
    ///
    /// Each word is read as JSON when it parses, otherwise as a plain string,
    /// so `5` becomes a number and `Python` stays a string.
    pub fn from_cli<S: AsRef<str>>(words: &[S]) -> Self {
        let positional = words
            .iter()
            .map(|w| {
                let w = w.as_ref();
                serde_json::from_str(w).unwrap_or_else(|_| Value::String(w.to_string()))
            })
            .collect();
        Self {
            positional,
            keyword: Map::new(),
        }
    }

    /// Total number of supplied arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bind the arguments to the given parameter names.
    ///
    /// Positional arguments fill parameters left to right; the remainder must
    /// come from keywords. Every parameter is required.
    pub fn bind(&self, params: &[&str]) -> PluginResult<Vec<&Value>> {
        if self.positional.len() > params.len() {
            return Err(PluginError::Arity {
                expected: params.len(),
                got: self.positional.len(),
            });
        }

        for key in self.keyword.keys() {
            match params.iter().position(|p| p == key) {
                None => return Err(PluginError::UnexpectedKeyword(key.clone())),
                Some(i) if i < self.positional.len() => {
                    return Err(PluginError::DuplicateArgument(key.clone()))
                }
                Some(_) => {}
            }
        }

        params
            .iter()
            .enumerate()
            .map(|(i, name)| {
                self.positional
                    .get(i)
                    .or_else(|| self.keyword.get(*name))
                    .ok_or_else(|| PluginError::MissingArgument(name.to_string()))
            })
            .collect()
    }
}

impl From<Vec<Value>> for PluginArgs {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keyword: Map::new(),
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build positional `PluginArgs` from expressions.
///
/// ```
/// use plugrun::plugin_args;
///
/// let args = plugin_args![5, 7];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! plugin_args {
    () => {
        $crate::plugin::args::PluginArgs::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::plugin::args::PluginArgs::new()$(.arg($value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let args = PluginArgs::new().arg(5).arg("x").kwarg("flag", true);

        assert_eq!(args.positional, vec![json!(5), json!("x")]);
        assert_eq!(args.keyword.get("flag"), Some(&json!(true)));
        assert_eq!(args.len(), 3);
        assert!(!args.is_empty());
    }

    #[test]
    fn test_macro() {
        assert!(plugin_args![].is_empty());
        assert_eq!(plugin_args!["Python"].positional, vec![json!("Python")]);
    }

    #[test]
    fn test_from_cli() {
        let args = PluginArgs::from_cli(&["5", "Python", "2.5", "[1,2]"]);

        assert_eq!(
            args.positional,
            vec![json!(5), json!("Python"), json!(2.5), json!([1, 2])]
        );
    }

    #[test]
    fn test_bind_positional() {
        let args = plugin_args![5, 7];
        let bound = args.bind(&["a", "b"]).unwrap();
        assert_eq!(bound, vec![&json!(5), &json!(7)]);
    }

    #[test]
    fn test_bind_mixed() {
        let args = PluginArgs::new().arg(5).kwarg("b", 7);
        let bound = args.bind(&["a", "b"]).unwrap();
        assert_eq!(bound, vec![&json!(5), &json!(7)]);
    }

    #[test]
    fn test_bind_too_many() {
        let err = plugin_args![1, 2, 3].bind(&["a", "b"]).unwrap_err();
        assert_eq!(err, PluginError::Arity { expected: 2, got: 3 });
    }

    #[test]
    fn test_bind_too_many_ignores_keywords_in_count() {
        let args = plugin_args![1, 2, 3].kwarg("z", 4);
        let err = args.bind(&["a", "b"]).unwrap_err();
        assert_eq!(err, PluginError::Arity { expected: 2, got: 3 });
        assert_eq!(err.to_string(), "takes 2 argument(s) but 3 were given");
    }

    #[test]
    fn test_bind_missing() {
        let err = plugin_args![1].bind(&["a", "b"]).unwrap_err();
        assert_eq!(err, PluginError::MissingArgument("b".to_string()));
    }

    #[test]
    fn test_bind_unexpected_keyword() {
        let args = PluginArgs::new().kwarg("c", 1);
        let err = args.bind(&["a"]).unwrap_err();
        assert_eq!(err, PluginError::UnexpectedKeyword("c".to_string()));
    }

    #[test]
    fn test_bind_duplicate() {
        let args = PluginArgs::new().arg(1).kwarg("a", 2);
        let err = args.bind(&["a"]).unwrap_err();
        assert_eq!(err, PluginError::DuplicateArgument("a".to_string()));
    }

    #[test]
    fn test_deserialize_partial() {
        let args: PluginArgs = serde_json::from_str(r#"{"positional": [1]}"#).unwrap();
        assert_eq!(args.positional, vec![json!(1)]);
        assert!(args.keyword.is_empty());
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
