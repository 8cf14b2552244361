//! Input coercion for GraphQL's built-in scalars.
//!
//! https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars

use crate::Value;

pub(super) fn coerce_boolean(raw: &Value) -> Result<Value, String> {
    match raw {
        Value::Boolean(value) => Ok(Value::Boolean(*value)),
        other => Err(format!("expected a boolean, found {}", describe(other))),
    }
}

pub(super) fn coerce_float(raw: &Value) -> Result<Value, String> {
    match raw {
        Value::Float(value) if value.is_finite() => Ok(Value::Float(*value)),
        Value::Float(value) => Err(format!("{value} is not a finite number")),
        Value::Int(value) => Ok(Value::Float(*value as f64)),
        other => Err(format!("expected a number, found {}", describe(other))),
    }
}

pub(super) fn coerce_id(raw: &Value) -> Result<Value, String> {
    match raw {
        Value::String(value) => Ok(Value::String(value.clone())),
        Value::Int(value) => Ok(Value::String(value.to_string())),
        other => Err(format!(
            "expected a string or an integer, found {}",
            describe(other),
        )),
    }
}

pub(super) fn coerce_int(raw: &Value) -> Result<Value, String> {
    match raw {
        Value::Int(value) if i32::try_from(*value).is_ok() => Ok(Value::Int(*value)),
        Value::Int(value) => Err(format!(
            "{value} cannot be represented as a signed 32-bit integer",
        )),
        other => Err(format!("expected an integer, found {}", describe(other))),
    }
}

pub(super) fn coerce_string(raw: &Value) -> Result<Value, String> {
    match raw {
        Value::String(value) => Ok(Value::String(value.clone())),
        other => Err(format!("expected a string, found {}", describe(other))),
    }
}

fn describe(value: &Value) -> String {
    format!("{} `{value}`", value.kind_name())
}
