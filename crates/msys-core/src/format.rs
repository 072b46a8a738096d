//! Value Formatting
//!
//! `print` renders a top-level sequence as `[a, b, c]`. Everything else, and
//! every element inside that sequence, uses the default text from `Display`.
//! The default text of a sequence is its elements joined by `,` with no
//! brackets, so `[1, [2, 3]]` prints as `[1, 2,3]`.

use std::fmt;

use crate::value::{Shape, Value};

/// Render a value for `sys.print`.
pub fn print(value: &Value) -> String {
    match value.shape() {
        Shape::Sequence(items) => {
            let mut out = String::from("[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&item.to_string());
            }
            out.push(']');
            out
        }
        Shape::Scalar(scalar) => scalar.to_string(),
    }
}

/// Default text of a number: integral values carry no fraction, non-finite
/// values use the spelled-out names.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // covers -0.0
        f.write_str("0")
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::Str(s) => f.write_str(s),
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}
