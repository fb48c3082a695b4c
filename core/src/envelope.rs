//! Response envelope unwrapping.
//!
//! The backend sometimes wraps a payload under a named field
//! (`{"tag": {...}}`, `{"notes": [...]}`) and sometimes returns it bare.
//! An [`Unwrap`] rule names the field to look for; a body without that
//! field is taken as the payload itself.

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwrap {
    /// Use the body as-is.
    Bare,
    /// Take `body[name]` when the body is an object carrying `name`.
    Field(&'static str),
    /// Unwrap the list envelope, then the per-item envelope of every
    /// element.
    Each {
        list: &'static str,
        item: &'static str,
    },
}

impl Unwrap {
    pub fn apply(self, value: Value) -> Value {
        match self {
            Unwrap::Bare => value,
            Unwrap::Field(name) => take_field(value, name),
            Unwrap::Each { list, item } => match take_field(value, list) {
                Value::Array(items) => Value::Array(
                    items
                        .into_iter()
                        .map(|element| take_field(element, item))
                        .collect(),
                ),
                other => other,
            },
        }
    }
}

fn take_field(value: Value, name: &str) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key(name) => {
            map.remove(name).unwrap_or(Value::Null)
        }
        other => other,
    }
}
