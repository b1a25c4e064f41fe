//! Built-in sample plugins.

use crate::core::Result;
use crate::plugin::args::{value_kind, PluginArgs};
use crate::plugin::interface::{
    render_output, Plugin, PluginError, PluginInfo, PluginOutput, PluginResult,
};
use crate::plugin::registry::PluginRegistry;
use serde_json::{json, Number, Value};

/// Registered name of [`HelloWorldPlugin`].
pub const HELLO_WORLD: &str = "hello_world";
/// Registered name of [`AddNumbersPlugin`].
pub const ADD_NUMBERS: &str = "add_numbers";
/// Registered name of [`ReverseStringPlugin`].
pub const REVERSE_STRING: &str = "reverse_string";

/// Returns a fixed greeting, ignoring its arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct HelloWorldPlugin;

impl Plugin for HelloWorldPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo::new("Returns a hello message")
    }

    fn execute(&self, _args: &PluginArgs) -> PluginResult<PluginOutput> {
        Ok(json!("Hello, World!"))
    }
}

/// Adds two numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct AddNumbersPlugin;

enum Operand {
    Int(i128),
    Float(f64),
}

impl Operand {
    fn parse(name: &str, value: &Value) -> PluginResult<Self> {
        let number = match value {
            Value::Number(n) => n,
            other => {
                return Err(PluginError::ArgumentType {
                    name: name.to_string(),
                    expected: "a number",
                    found: value_kind(other),
                })
            }
        };

        if let Some(i) = number.as_i64() {
            Ok(Operand::Int(i as i128))
        } else if let Some(u) = number.as_u64() {
            Ok(Operand::Int(u as i128))
        } else {
            number
                .as_f64()
                .map(Operand::Float)
                .ok_or_else(|| PluginError::failed(format!("argument '{}' is not representable", name)))
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Operand::Int(i) => *i as f64,
            Operand::Float(f) => *f,
        }
    }
}

/// Format a float the way JSON numbers print, keeping a trailing `.0`.
fn format_float(value: f64) -> String {
    Number::from_f64(value)
        .map(|n| n.to_string())
        .unwrap_or_else(|| value.to_string())
}

impl Plugin for AddNumbersPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo::new("Adds two numbers").with_usage("<a> <b>")
    }

    fn execute(&self, args: &PluginArgs) -> PluginResult<PluginOutput> {
        let bound = args.bind(&["a", "b"])?;
        let a = Operand::parse("a", bound[0])?;
        let b = Operand::parse("b", bound[1])?;

        let sum = match (&a, &b) {
            (Operand::Int(x), Operand::Int(y)) => (x + y).to_string(),
            _ => format_float(a.as_f64() + b.as_f64()),
        };

        Ok(json!(format!(
            "The sum of {} and {} is {}",
            bound[0], bound[1], sum
        )))
    }
}

/// Reverses a string or an array.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseStringPlugin;

impl Plugin for ReverseStringPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo::new("Reverses a string or array").with_usage("<string>")
    }

    fn execute(&self, args: &PluginArgs) -> PluginResult<PluginOutput> {
        let bound = args.bind(&["string"])?;
        let reversed = match bound[0] {
            Value::String(s) => s.chars().rev().collect::<String>(),
            Value::Array(items) => {
                let items: Vec<Value> = items.iter().rev().cloned().collect();
                render_output(&Value::Array(items))
            }
            other => {
                return Err(PluginError::ArgumentType {
                    name: "string".to_string(),
                    expected: "a string or array",
                    found: value_kind(other),
                })
            }
        };

        Ok(json!(format!("Reversed string: {}", reversed)))
    }
}

/// Register the sample plugins, in order.
pub fn register_builtins(registry: &mut PluginRegistry) -> Result<()> {
    registry.register(HELLO_WORLD, HelloWorldPlugin)?;
    registry.register(ADD_NUMBERS, AddNumbersPlugin)?;
    registry.register(REVERSE_STRING, ReverseStringPlugin)?;
    Ok(())
}

impl PluginRegistry {
    /// Create a registry preloaded with the sample plugins.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        register_builtins(&mut registry)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin_args;

    fn run(plugin: &dyn Plugin, args: PluginArgs) -> PluginResult<PluginOutput> {
        plugin.execute(&args)
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(run(&HelloWorldPlugin, plugin_args![]).unwrap(), json!("Hello, World!"));
        assert_eq!(
            run(&HelloWorldPlugin, plugin_args![1, "x"].kwarg("k", 2)).unwrap(),
            json!("Hello, World!")
        );
    }

    #[test]
    fn test_add_integers() {
        let output = run(&AddNumbersPlugin, plugin_args![5, 7]).unwrap();
        assert_eq!(output, json!("The sum of 5 and 7 is 12"));
    }

    #[test]
    fn test_add_keywords() {
        let args = PluginArgs::new().kwarg("b", 7).kwarg("a", 5);
        let output = run(&AddNumbersPlugin, args).unwrap();
        assert_eq!(output, json!("The sum of 5 and 7 is 12"));
    }

    #[test]
    fn test_add_floats() {
        let output = run(&AddNumbersPlugin, plugin_args![1.5, 2]).unwrap();
        assert_eq!(output, json!("The sum of 1.5 and 2 is 3.5"));

        let output = run(&AddNumbersPlugin, plugin_args![0.5, 0.5]).unwrap();
        assert_eq!(output, json!("The sum of 0.5 and 0.5 is 1.0"));
    }

    #[test]
    fn test_add_large_integers_do_not_overflow() {
        let output = run(&AddNumbersPlugin, plugin_args![u64::MAX, 1]).unwrap();
        assert_eq!(
            output,
            json!("The sum of 18446744073709551615 and 1 is 18446744073709551616")
        );
    }

    #[test]
    fn test_add_wrong_arity() {
        let err = run(&AddNumbersPlugin, plugin_args![5]).unwrap_err();
        assert_eq!(err, PluginError::MissingArgument("b".to_string()));

        let err = run(&AddNumbersPlugin, plugin_args![1, 2, 3]).unwrap_err();
        assert_eq!(err, PluginError::Arity { expected: 2, got: 3 });
    }

    #[test]
    fn test_add_wrong_type() {
        let err = run(&AddNumbersPlugin, plugin_args![5, "seven"]).unwrap_err();
        assert_eq!(
            err,
            PluginError::ArgumentType {
                name: "b".to_string(),
                expected: "a number",
                found: "string",
            }
        );
    }

    #[test]
    fn test_reverse_string() {
        let output = run(&ReverseStringPlugin, plugin_args!["Python"]).unwrap();
        assert_eq!(output, json!("Reversed string: nohtyP"));
    }

    #[test]
    fn test_reverse_unicode() {
        let output = run(&ReverseStringPlugin, plugin_args!["héllo"]).unwrap();
        assert_eq!(output, json!("Reversed string: olléh"));
    }

    #[test]
    fn test_reverse_array() {
        let output = run(&ReverseStringPlugin, plugin_args![json!([1, "two", 3])]).unwrap();
        assert_eq!(output, json!("Reversed string: [3,\"two\",1]"));

        let output = run(&ReverseStringPlugin, plugin_args![json!([])]).unwrap();
        assert_eq!(output, json!("Reversed string: []"));
    }

    #[test]
    fn test_reverse_wrong_type() {
        let err = run(&ReverseStringPlugin, plugin_args![42]).unwrap_err();
        assert!(matches!(err, PluginError::ArgumentType { found: "number", .. }));

        let err = run(&ReverseStringPlugin, plugin_args![json!({"a": 1})]).unwrap_err();
        assert!(matches!(err, PluginError::ArgumentType { found: "object", .. }));

        let err = run(&ReverseStringPlugin, plugin_args![]).unwrap_err();
        assert_eq!(err, PluginError::MissingArgument("string".to_string()));
    }

    #[test]
    fn test_with_builtins_order() {
        let registry = PluginRegistry::with_builtins().unwrap();
        assert_eq!(registry.list(), vec![HELLO_WORLD, ADD_NUMBERS, REVERSE_STRING]);
    }

    #[test]
    fn test_builtin_info() {
        assert_eq!(AddNumbersPlugin.info().usage, "<a> <b>");
        assert!(HelloWorldPlugin.info().usage.is_empty());
    }
}
