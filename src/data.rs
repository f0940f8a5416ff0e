//! Read access to a resource's attributes.
//!
//! The accessors in [`crate::accessors`] never talk to a concrete framework.
//! They read through [`ResourceData`], a single "read attribute by key"
//! capability. Two implementations ship with the crate:
//!
//! - [`serde_json::Value`]: a JSON state document, addressed by dotted path
//!   (`tags.0`, `network.subnet_id`).
//! - [`FlatmapData`]: a schema-backed flat map of `key -> string`, the
//!   encoding stored in instance state. Lists are written as `name.#` plus
//!   `name.0`, `name.1`, ...; sets as `name.#` plus one hash-derived key per
//!   element.
//!
//! # Example
//!
//! ```
//! use tf_provider_helpers::data::{FlatmapData, ResourceData};
//! use tf_provider_helpers::schema::{Attribute, AttributeType, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .with_attribute("list_of_names", Attribute::list(AttributeType::String));
//!
//! let mut data = FlatmapData::new(schema);
//! data.set("list_of_names", json!(["bob", "jess"])).unwrap();
//!
//! assert_eq!(data.attributes()["list_of_names.#"], "2");
//! assert_eq!(data.get("list_of_names"), Some(json!(["bob", "jess"])));
//! assert_eq!(data.get("list_of_names.1"), Some(json!("jess")));
//! ```

use crate::error::HelperError;
use crate::schema::{AttributeType, Schema};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Suffix holding the element count of a list or set.
const COUNT_KEY: &str = "#";

/// Hex digits of the element hash kept in a set element key.
const SET_CODE_LEN: usize = 16;

/// Read-only view of a single resource's attributes.
pub trait ResourceData {
    /// Read the value stored at a dotted attribute path.
    ///
    /// Returns `None` when the attribute is unset. Implementations apply
    /// their own type coercion; lists and sets are returned as arrays.
    fn get(&self, key: &str) -> Option<Value>;
}

impl<T: ResourceData + ?Sized> ResourceData for &T {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}

impl ResourceData for Value {
    fn get(&self, key: &str) -> Option<Value> {
        if let Some(prefix) = key.strip_suffix(".#") {
            return lookup(self, prefix)
                .and_then(Value::as_array)
                .map(|items| Value::from(items.len()));
        }
        lookup(self, key).filter(|v| !v.is_null()).cloned()
    }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Schema-backed attributes in flatmap form.
#[derive(Debug, Clone, Default)]
pub struct FlatmapData {
    schema: Schema,
    attributes: HashMap<String, String>,
}

impl FlatmapData {
    /// Create an empty data object for the given schema.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            attributes: HashMap::new(),
        }
    }

    /// Create a data object from previously stored flat attributes.
    pub fn from_state(schema: Schema, attributes: HashMap<String, String>) -> Self {
        Self { schema, attributes }
    }

    /// The flat attribute map.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// The schema used to interpret the attributes.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Write a top-level attribute, replacing any previous value.
    ///
    /// `Value::Null` clears the attribute. Lists and sets are given as JSON
    /// arrays; duplicate set elements collapse into one.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::UnknownAttribute`] if `key` is not in the schema
    /// and [`HelperError::InvalidValue`] if the value does not match its type.
    /// On error the existing attributes are left untouched.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), HelperError> {
        let attr = self
            .schema
            .attribute(key)
            .ok_or_else(|| HelperError::UnknownAttribute(key.to_string()))?;

        let mut flat = HashMap::new();
        flatten(key, &attr.attr_type, &value, &mut flat)?;

        let nested_prefix = format!("{}.", key);
        self.attributes
            .retain(|k, _| k != key && !k.starts_with(&nested_prefix));
        self.attributes.extend(flat);
        Ok(())
    }

    fn read(&self, attr_type: &AttributeType, path: &str) -> Option<Value> {
        match attr_type {
            AttributeType::String => self.attributes.get(path).cloned().map(Value::String),
            AttributeType::Int64 => self.parse_scalar::<i64>(path).map(Value::from),
            AttributeType::Float64 => self
                .parse_scalar::<f64>(path)
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
            AttributeType::Bool => self.parse_scalar::<bool>(path).map(Value::Bool),
            AttributeType::List(elem) => {
                // A stored count can exceed the elements actually present.
                let count = self.count(path)?.min(self.child_keys(path).len());
                let items = (0..count)
                    .map(|i| {
                        self.read(elem, &format!("{}.{}", path, i))
                            .unwrap_or(Value::Null)
                    })
                    .collect();
                Some(Value::Array(items))
            },
            AttributeType::Set(elem) => {
                self.count(path)?;
                let items = self
                    .child_keys(path)
                    .into_iter()
                    .filter_map(|code| self.read(elem, &format!("{}.{}", path, code)))
                    .collect();
                Some(Value::Array(items))
            },
        }
    }

    fn parse_scalar<T: std::str::FromStr>(&self, path: &str) -> Option<T> {
        let raw = self.attributes.get(path)?;
        let parsed = raw.parse::<T>().ok();
        if parsed.is_none() {
            tracing::trace!(path, raw = %raw, "Attribute value does not parse as its schema type");
        }
        parsed
    }

    fn count(&self, path: &str) -> Option<usize> {
        self.parse_scalar(&format!("{}.{}", path, COUNT_KEY))
    }

    /// Element keys directly under a list or set, in hash iteration order.
    fn child_keys<'a>(&'a self, path: &str) -> HashSet<&'a str> {
        let prefix = format!("{}.", path);
        self.attributes
            .keys()
            .filter_map(|k| k.strip_prefix(&prefix))
            .filter_map(|rest| rest.split('.').next())
            .filter(|code| *code != COUNT_KEY)
            .collect()
    }
}

impl ResourceData for FlatmapData {
    fn get(&self, key: &str) -> Option<Value> {
        let mut segments = key.split('.');
        let name = segments.next()?;
        let attr = self.schema.attribute(name)?;

        let mut attr_type = &attr.attr_type;
        let mut path = name.to_string();
        for segment in segments {
            let elem = attr_type.element_type()?;
            if segment == COUNT_KEY {
                return self.count(&path).map(Value::from);
            }
            path.push('.');
            path.push_str(segment);
            attr_type = elem;
        }

        match self.read(attr_type, &path) {
            Some(value) => Some(value),
            None if path == name => attr.default.clone(),
            None => None,
        }
    }
}

fn flatten(
    path: &str,
    attr_type: &AttributeType,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), HelperError> {
    if value.is_null() {
        return Ok(());
    }

    let invalid = || HelperError::invalid_value(path, attr_type.name());
    match attr_type {
        AttributeType::String => {
            let s = value.as_str().ok_or_else(invalid)?;
            out.insert(path.to_string(), s.to_string());
        },
        AttributeType::Int64 => {
            let n = value.as_i64().ok_or_else(invalid)?;
            out.insert(path.to_string(), n.to_string());
        },
        AttributeType::Float64 => {
            let n = value.as_f64().ok_or_else(invalid)?;
            out.insert(path.to_string(), n.to_string());
        },
        AttributeType::Bool => {
            let b = value.as_bool().ok_or_else(invalid)?;
            out.insert(path.to_string(), b.to_string());
        },
        AttributeType::List(elem) => {
            let items = value.as_array().ok_or_else(invalid)?;
            out.insert(format!("{}.{}", path, COUNT_KEY), items.len().to_string());
            for (i, item) in items.iter().enumerate() {
                flatten(&format!("{}.{}", path, i), elem, item, out)?;
            }
        },
        AttributeType::Set(elem) => {
            let items = value.as_array().ok_or_else(invalid)?;
            let mut seen = HashSet::new();
            for item in items {
                let code = set_code(item);
                if seen.insert(code.clone()) {
                    flatten(&format!("{}.{}", path, code), elem, item, out)?;
                }
            }
            out.insert(format!("{}.{}", path, COUNT_KEY), seen.len().to_string());
        },
    }
    Ok(())
}

/// Hash-derived key identifying a set element.
///
/// The key is persisted with the state and must not change between builds.
fn set_code(value: &Value) -> String {
    let hash = blake3::hash(value.to_string().as_bytes());
    hash.to_hex().as_str()[..SET_CODE_LEN].to_string()
}
