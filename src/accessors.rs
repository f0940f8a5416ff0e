//! Typed accessors over [`ResourceData`].
//!
//! Each accessor reads one attribute and coerces it to a concrete Rust type.
//! Reads are lenient: a missing or wrong-typed attribute yields the zero
//! value of the target type (`""`, `0`, or an empty `Vec`). Callers that need
//! to tell "absent" from "zero" should call [`ResourceData::get`] directly.
//!
//! # Example
//!
//! ```
//! use tf_provider_helpers::accessors::{get_int_value, get_list_value_as_string_slice};
//! use serde_json::json;
//!
//! let state = json!({"number_of_zones": 2, "list_of_names": ["bob", "jess"]});
//!
//! assert_eq!(get_int_value(&state, "number_of_zones"), 2);
//! assert_eq!(get_list_value_as_string_slice(&state, "list_of_names"), vec!["bob", "jess"]);
//! assert_eq!(get_int_value(&state, "missing"), 0);
//! ```

use crate::data::ResourceData;
use serde_json::Value;

/// Read an attribute as a string, or `""` if unset.
pub fn get_string_value<D: ResourceData + ?Sized>(d: &D, key: &str) -> String {
    read(d, key).map(|v| coerce_string(&v)).unwrap_or_default()
}

/// Read an attribute as an integer, or `0` if unset or non-numeric.
pub fn get_int_value<D: ResourceData + ?Sized>(d: &D, key: &str) -> i64 {
    read(d, key).map(|v| coerce_int(&v)).unwrap_or_default()
}

/// Read an ordered list attribute as strings, preserving order.
pub fn get_list_value_as_string_slice<D: ResourceData + ?Sized>(d: &D, key: &str) -> Vec<String> {
    elements(d, key).iter().map(coerce_string).collect()
}

/// Read an ordered list attribute as integers, preserving order.
pub fn get_list_value_as_int_slice<D: ResourceData + ?Sized>(d: &D, key: &str) -> Vec<i64> {
    elements(d, key).iter().map(coerce_int).collect()
}

/// Read a set attribute as strings.
///
/// The order is whatever the underlying set yields; compare the result as a
/// set.
pub fn get_set_value_as_string_slice<D: ResourceData + ?Sized>(d: &D, key: &str) -> Vec<String> {
    elements(d, key).iter().map(coerce_string).collect()
}

/// Read a set attribute as integers.
///
/// The order is whatever the underlying set yields; compare the result as a
/// set.
pub fn get_set_value_as_int_slice<D: ResourceData + ?Sized>(d: &D, key: &str) -> Vec<i64> {
    elements(d, key).iter().map(coerce_int).collect()
}

fn read<D: ResourceData + ?Sized>(d: &D, key: &str) -> Option<Value> {
    let value = d.get(key);
    if value.is_none() {
        tracing::trace!(key, "Attribute unset, using zero value");
    }
    value
}

fn elements<D: ResourceData + ?Sized>(d: &D, key: &str) -> Vec<Value> {
    match read(d, key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::trace!(key, got = %other, "Attribute is not a collection, using empty value");
            Vec::new()
        },
        None => Vec::new(),
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}
