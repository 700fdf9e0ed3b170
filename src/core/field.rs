//! Typed key-value fields for structured logging

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON encoding
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A single structured key-value pair attached to a log record.
///
/// Fields are forwarded to the backend in the order the caller supplied them.
/// Duplicate keys are not rejected; encoders keep the last occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from((key, value): (K, V)) -> Self {
        Field::new(key, value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_conversions() {
        assert_eq!(Field::new("a", 1).value, FieldValue::Int(1));
        assert_eq!(Field::new("b", 7u64).value, FieldValue::UInt(7));
        assert_eq!(Field::new("c", "x").value, FieldValue::String("x".into()));
        assert_eq!(Field::new("d", None::<i32>).value, FieldValue::Null);
        assert_eq!(Field::from(("e", true)).value, FieldValue::Bool(true));
    }

    #[test]
    fn test_nan_encodes_as_null() {
        assert_eq!(
            FieldValue::Float(f64::NAN).to_json_value(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Field::new("user_id", 42).to_string(), "user_id=42");
    }
}
