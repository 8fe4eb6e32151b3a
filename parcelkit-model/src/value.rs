//! Runtime property value union.
//!
//! Entities store their field values as [`Value`]s so the codecs can read
//! and write them by name without static knowledge of the concrete type.
//! `Map` keeps insertion order because wire output order is significant
//! for the SOAP consumers.

use crate::Entity;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value as JsonValue;

/// A dynamically typed property value.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Entity(Box<dyn Entity>),
    List(Vec<Value>),
    /// Ordered key/value pairs (XML structured output, opaque JSON objects).
    Map(Vec<(String, Value)>),
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entity(&self) -> Option<&dyn Entity> {
        match self {
            Value::Entity(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entity_mut(&mut self) -> Option<&mut dyn Entity> {
        match self {
            Value::Entity(e) => Some(e.as_mut()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Converts a parsed JSON value into an opaque [`Value`].
    ///
    /// Used for passthrough of wire data the schema does not model; no
    /// entity interpretation happens here.
    #[must_use]
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => Value::Number(n.clone()),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::List(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(serde_json::Number::from(n))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<Box<dyn Entity>> for Value {
    fn from(e: Box<dyn Entity>) -> Self {
        Value::Entity(e)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
