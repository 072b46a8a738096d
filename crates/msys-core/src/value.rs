//! Value Representation
//!
//! The values handed to `sys.print` / `sys.log`. For formatting purposes every
//! value is either an ordered sequence or a scalar; see [`Value::shape`].

use std::collections::BTreeMap;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value
    Null,

    /// Boolean value
    Bool(bool),

    /// Numeric value (IEEE 754)
    Number(f64),

    /// Text value
    Str(String),

    /// Ordered sequence of values
    Sequence(Vec<Value>),

    /// Keyed record
    Object(BTreeMap<String, Value>),
}

/// Formatting category of a value, decided once per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Sequence(&'a [Value]),
    Scalar(&'a Value),
}

impl Value {
    /// Classify without touching the value
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Sequence(items) => Shape::Sequence(items),
            other => Shape::Scalar(other),
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // as_f64 only fails for arbitrary-precision numbers, which are not enabled
            Json::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Object(
                fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sequences_take_the_sequence_branch() {
        let seq = Value::from(vec![1, 2]);
        assert!(matches!(seq.shape(), Shape::Sequence(items) if items.len() == 2));

        for scalar in [
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::from("[1, 2]"),
            Value::Object(BTreeMap::new()),
        ] {
            assert_eq!(scalar.shape(), Shape::Scalar(&scalar));
        }
    }

    #[test]
    fn shape_leaves_value_untouched() {
        let seq = Value::from(vec![Value::from(1), Value::Null]);
        let before = seq.clone();
        let _ = seq.shape();
        let _ = seq.shape();
        assert_eq!(seq, before);
    }

    #[test]
    fn none_becomes_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Str("x".into()));
    }

    #[test]
    fn json_conversion() {
        let json: serde_json::Value =
            serde_json::from_str(r#"[1, "a", null, true, [2.5], {"k": 1}]"#).expect("valid json");
        let value = Value::from(json);

        let mut obj = BTreeMap::new();
        obj.insert("k".to_string(), Value::Number(1.0));
        assert_eq!(
            value,
            Value::Sequence(vec![
                Value::Number(1.0),
                Value::Str("a".into()),
                Value::Null,
                Value::Bool(true),
                Value::Sequence(vec![Value::Number(2.5)]),
                Value::Object(obj),
            ])
        );
    }
}
