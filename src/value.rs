//! The converted-value model.
//!
//! Every resource element converts into a [`Value`]: a scalar, an ordered
//! array of scalars, or either of those wrapped together with a trailing
//! comment. The comment wrapper is transparent to all accessors and to
//! equality against the underlying primitive, so attaching a comment never
//! changes how a value compares or serializes.

use serde::{Serialize, Serializer};

/// A converted resource value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A boolean scalar (from `bool` resources).
    Bool(bool),

    /// An integer scalar (from `integer` resources).
    Integer(i64),

    /// A string scalar (from `string` resources and any unregistered type).
    String(String),

    /// An ordered sequence of values (from `*-array` resources).
    Array(Vec<Value>),

    /// A value carrying the trailing comment found next to its element.
    Commented(Box<Value>, String),
}

impl Value {
    /// Wraps this value with a comment. Re-wrapping a commented value
    /// replaces the comment instead of nesting.
    pub fn with_comment(self, comment: impl Into<String>) -> Value {
        match self {
            Value::Commented(inner, _) => Value::Commented(inner, comment.into()),
            other => Value::Commented(Box::new(other), comment.into()),
        }
    }

    /// The attached comment, if any.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Value::Commented(_, comment) => Some(comment),
            _ => None,
        }
    }

    /// The value itself, with any comment wrapper peeled off.
    pub fn inner(&self) -> &Value {
        match self {
            Value::Commented(inner, _) => inner,
            other => other,
        }
    }

    /// Returns the boolean if this is (a possibly commented) `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.inner() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is (a possibly commented) `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self.inner() {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string if this is (a possibly commented) `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self.inner() {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if this is (a possibly commented) `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self.inner() {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// Comments are metadata, not payload: a commented value serializes exactly
/// like its inner value.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Commented(inner, _) => inner.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_wrap_keeps_value_behavior() {
        let value = Value::from("Hello").with_comment("app title");
        assert_eq!(value, "Hello");
        assert_eq!(value.comment(), Some("app title"));
        assert_eq!(value.as_str(), Some("Hello"));
    }

    #[test]
    fn test_rewrap_replaces_comment() {
        let value = Value::Bool(true)
            .with_comment("first")
            .with_comment("second");
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.comment(), Some("second"));
        // No nested Commented layers.
        assert!(matches!(value.inner(), Value::Bool(true)));
    }

    #[test]
    fn test_plain_value_has_no_comment() {
        assert_eq!(Value::Integer(7).comment(), None);
    }

    #[test]
    fn test_serialize_drops_comment() {
        let value = Value::from("x").with_comment("hidden");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"x\"");

        let array = Value::Array(vec![Value::Integer(1), Value::Bool(false)]);
        assert_eq!(serde_json::to_string(&array).unwrap(), "[1,false]");
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        assert_eq!(Value::Bool(true).as_str(), None);
        assert_eq!(Value::from("9").as_integer(), None);
        assert_eq!(Value::Integer(9).as_array(), None);
    }
}
