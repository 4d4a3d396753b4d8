//! The JSON document model.
//!
//! [`JsonValue`] is a closed tagged union over the six JSON value kinds plus
//! an uninitialized sentinel that only default construction produces — a
//! successful parse never yields it. Exactly one variant is active at a time;
//! accessing the payload under the wrong variant assumption is reported
//! explicitly through [`TypeError::WrongVariantAccess`], never coerced.
//!
//! String payloads hold the canonical *escaped* textual form (see
//! [`escape`](crate::escape)); [`JsonValue::unescaped`] produces display text.
//!
//! A document tree owns its children exclusively — no aliasing, no
//! back-references — and is dropped as a whole.

use std::fmt;

use crate::error::TypeError;
use crate::escape;
use crate::number::JsonNumber;
use crate::ordered_map::OrderedMap;

/// An object: string keys to documents, in first-insertion order.
pub type JsonObject = OrderedMap<String, JsonValue>;

/// One JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// Default-construction sentinel. Never produced by parsing; cannot be
    /// serialized.
    #[default]
    Uninitialized,
    Null,
    Bool(bool),
    Number(JsonNumber),
    /// Canonical escaped form of the string body, without surrounding quotes.
    String(String),
    Object(JsonObject),
    Array(Vec<JsonValue>),
}

impl JsonValue {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, JsonValue::Uninitialized)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// The active variant's name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Uninitialized => "uninitialized",
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Object(_) => "object",
            JsonValue::Array(_) => "array",
        }
    }

    fn wrong_variant(&self, expected: &'static str) -> TypeError {
        TypeError::WrongVariantAccess {
            expected,
            found: self.type_name(),
        }
    }

    /// Succeeds only on the `Null` variant.
    pub fn as_null(&self) -> Result<(), TypeError> {
        match self {
            JsonValue::Null => Ok(()),
            other => Err(other.wrong_variant("null")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            JsonValue::Bool(b) => Ok(*b),
            other => Err(other.wrong_variant("boolean")),
        }
    }

    pub fn as_number(&self) -> Result<&JsonNumber, TypeError> {
        match self {
            JsonValue::Number(n) => Ok(n),
            other => Err(other.wrong_variant("number")),
        }
    }

    /// The raw escaped string body.
    pub fn as_str(&self) -> Result<&str, TypeError> {
        match self {
            JsonValue::String(s) => Ok(s),
            other => Err(other.wrong_variant("string")),
        }
    }

    /// The string body decoded into display text (escapes resolved).
    pub fn unescaped(&self) -> Result<String, TypeError> {
        self.as_str().map(escape::unescape_str)
    }

    pub fn as_object(&self) -> Result<&JsonObject, TypeError> {
        match self {
            JsonValue::Object(o) => Ok(o),
            other => Err(other.wrong_variant("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut JsonObject, TypeError> {
        match self {
            JsonValue::Object(o) => Ok(o),
            other => Err(other.wrong_variant("object")),
        }
    }

    pub fn as_array(&self) -> Result<&[JsonValue], TypeError> {
        match self {
            JsonValue::Array(a) => Ok(a),
            other => Err(other.wrong_variant("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<JsonValue>, TypeError> {
        match self {
            JsonValue::Array(a) => Ok(a),
            other => Err(other.wrong_variant("array")),
        }
    }

    /// Object member lookup by (escaped-form) key. `None` for absent keys and
    /// non-object variants alike.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Array element lookup by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(value: JsonNumber) -> Self {
        JsonValue::Number(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(JsonNumber::from_i64(value))
    }
}

impl From<String> for JsonValue {
    /// Takes the string as raw display text and stores its escaped form, so
    /// programmatically built documents meet the same invariant as parsed
    /// ones.
    fn from(value: String) -> Self {
        JsonValue::String(escape::escape_str(&value))
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(escape::escape_str(value))
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl fmt::Display for JsonValue {
    /// Renders through the pretty-printing serializer. An `Uninitialized`
    /// value anywhere in the tree surfaces as `fmt::Error`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::writer::to_text(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
