//! Safe-navigation helpers over untyped JSON trees.
//!
//! Every extraction rule is a chain of these calls ending in a typed
//! fallback, so a missing key, a `null`, or a wrong-shaped value at any
//! depth degrades to `None` instead of failing the record.

use serde_json::{Number, Value};

/// Walks `keys` through nested objects. Returns `None` the moment any step
/// is absent or the current node is not an object.
pub(crate) fn descend<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in keys {
        current = current.get(key)?;
    }
    Some(current)
}

pub(crate) fn str_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    descend(value, keys).and_then(Value::as_str)
}

pub(crate) fn u64_at(value: &Value, keys: &[&str]) -> Option<u64> {
    descend(value, keys).and_then(Value::as_u64)
}

pub(crate) fn i64_at(value: &Value, keys: &[&str]) -> Option<i64> {
    descend(value, keys).and_then(Value::as_i64)
}

pub(crate) fn number_at(value: &Value, keys: &[&str]) -> Option<Number> {
    descend(value, keys).and_then(Value::as_number).cloned()
}

pub(crate) fn array_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    descend(value, keys).and_then(Value::as_array)
}

/// Boolean coercion with a "not found" bias: anything other than a literal
/// `true` at the path — including strings, numbers, and `null` — is `false`.
pub(crate) fn bool_at(value: &Value, keys: &[&str]) -> bool {
    descend(value, keys).and_then(Value::as_bool).unwrap_or(false)
}
