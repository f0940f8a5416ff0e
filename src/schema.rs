//! Schema types describing the attributes of a resource.
//!
//! A [`Schema`] tells [`FlatmapData`](crate::data::FlatmapData) how to turn
//! flat string attributes back into typed values: which keys are integers,
//! which are ordered lists, and which are unordered sets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The type of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A string value.
    String,
    /// A 64-bit integer.
    Int64,
    /// A 64-bit floating point number.
    Float64,
    /// A boolean value.
    Bool,
    /// An ordered list of values of a single type.
    List(Box<AttributeType>),
    /// An unordered set of unique values of a single type.
    Set(Box<AttributeType>),
}

impl AttributeType {
    /// Create a list type.
    pub fn list(element_type: AttributeType) -> Self {
        Self::List(Box::new(element_type))
    }

    /// Create a set type.
    pub fn set(element_type: AttributeType) -> Self {
        Self::Set(Box::new(element_type))
    }

    /// The element type of a list or set, `None` for scalars.
    pub fn element_type(&self) -> Option<&AttributeType> {
        match self {
            Self::List(elem) | Self::Set(elem) => Some(elem),
            _ => None,
        }
    }

    /// A short name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::List(_) => "list",
            Self::Set(_) => "set",
        }
    }
}

/// Describes a single attribute in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// The type of the attribute.
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Value read back when the attribute is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl Attribute {
    /// Create a new attribute with the given type.
    pub fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            default: None,
        }
    }

    /// Create a string attribute.
    pub fn optional_string() -> Self {
        Self::new(AttributeType::String)
    }

    /// Create an int64 attribute.
    pub fn optional_int64() -> Self {
        Self::new(AttributeType::Int64)
    }

    /// Create a bool attribute.
    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool)
    }

    /// Create an ordered list attribute.
    pub fn list(element_type: AttributeType) -> Self {
        Self::new(AttributeType::list(element_type))
    }

    /// Create an unordered set attribute.
    pub fn set(element_type: AttributeType) -> Self {
        Self::new(AttributeType::set(element_type))
    }

    /// Set a default value for this attribute.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Schema for a resource or data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// Attributes keyed by name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Attribute>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to the schema.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
