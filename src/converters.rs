//! The value converter registry.
//!
//! Maps a resource type name (`bool`, `integer`, `string`, ...) to a pure
//! text-to-[`Value`] function. The registry is an owned object rather than
//! global state so tests and embedders can inject their own converters.
//! Unregistered type names are never an error: the text passes through as a
//! plain string.

use std::collections::HashMap;

use crate::value::Value;

/// A pure, total conversion from element text to a [`Value`].
pub type ConvertFn = fn(&str) -> Value;

/// Lookup table from resource type name to converter function.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    table: HashMap<String, ConvertFn>,
}

impl ConverterRegistry {
    /// Creates an empty registry with no converters at all.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in `bool`, `integer`, and `string`
    /// converters.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("bool", convert_bool);
        registry.register("integer", convert_integer);
        registry.register("string", convert_string);
        registry
    }

    /// Registers (or replaces) a converter for `type_name`.
    pub fn register(&mut self, type_name: impl Into<String>, converter: ConvertFn) {
        self.table.insert(type_name.into(), converter);
    }

    /// Looks up the converter registered for `type_name`, if any.
    pub fn get(&self, type_name: &str) -> Option<ConvertFn> {
        self.table.get(type_name).copied()
    }

    /// Converts `text` with the converter for `type_name`, or passes it
    /// through unconverted when no converter is registered.
    pub fn convert(&self, type_name: &str, text: &str) -> Value {
        match self.get(type_name) {
            Some(converter) => converter(text),
            None => Value::String(text.to_string()),
        }
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `true` iff the trimmed text equals "true", ASCII case-insensitive.
fn convert_bool(text: &str) -> Value {
    Value::Bool(text.trim().eq_ignore_ascii_case("true"))
}

/// Parses an `i64`, falling back to 0 on unparseable text.
fn convert_integer(text: &str) -> Value {
    Value::Integer(text.trim().parse().unwrap_or(0))
}

fn convert_string(text: &str) -> Value {
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_converter() {
        let registry = ConverterRegistry::new();
        assert_eq!(registry.convert("bool", "true"), Value::Bool(true));
        assert_eq!(registry.convert("bool", " TRUE "), Value::Bool(true));
        assert_eq!(registry.convert("bool", "false"), Value::Bool(false));
        assert_eq!(registry.convert("bool", "yes"), Value::Bool(false));
        assert_eq!(registry.convert("bool", ""), Value::Bool(false));
    }

    #[test]
    fn test_integer_converter() {
        let registry = ConverterRegistry::new();
        assert_eq!(registry.convert("integer", "42"), Value::Integer(42));
        assert_eq!(registry.convert("integer", " -7 "), Value::Integer(-7));
        assert_eq!(registry.convert("integer", "abc"), Value::Integer(0));
        assert_eq!(registry.convert("integer", ""), Value::Integer(0));
        assert_eq!(registry.convert("integer", "3.5"), Value::Integer(0));
    }

    #[test]
    fn test_string_converter() {
        let registry = ConverterRegistry::new();
        assert_eq!(
            registry.convert("string", "Hello World"),
            Value::String("Hello World".to_string())
        );
    }

    #[test]
    fn test_unregistered_type_passes_through() {
        let registry = ConverterRegistry::new();
        assert_eq!(
            registry.convert("custom", "42"),
            Value::String("42".to_string())
        );
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = ConverterRegistry::new();
        registry.register("shout", |text| Value::String(text.to_uppercase()));
        assert_eq!(registry.convert("shout", "hi"), "HI");
    }

    #[test]
    fn test_empty_registry_converts_nothing() {
        let registry = ConverterRegistry::empty();
        assert_eq!(registry.convert("bool", "true"), "true");
    }
}
