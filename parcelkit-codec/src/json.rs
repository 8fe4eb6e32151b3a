//! JSON envelope codec.
//!
//! Wire convention: a payload is wrapped in a single-key object whose key
//! is the entity's short name. `serialize` emits only the field map — the
//! caller (a parent serialize call, or the transport layer) adds the
//! envelope key, which is why nested calls compose into one document.
//!
//! Deserialization is tolerant of unknown data (opaque passthrough) but
//! strict about malformed data for recognized shapes.

use crate::collections::resolve_collection;
use crate::dates::{format_date, format_datetime, parse_date, parse_datetime};
use crate::{CodecError, CodecResult, Decoded};
use parcelkit_model::{
    schema_for, Entity, EntityType, PropertyDescriptor, PropertyKind, ServiceContext, TypeRegistry,
    Value,
};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

/// Serializes an entity's visible properties to a JSON field map.
///
/// Fails with [`CodecError::ServiceNotSet`] when no service context is
/// active; which properties are visible depends on that context.
pub fn serialize(entity: &dyn Entity) -> CodecResult<JsonValue> {
    let ctx = entity
        .service()
        .ok_or(CodecError::ServiceNotSet(entity.entity_name()))?;
    serialize_with(entity, ctx)
}

/// Deserializes a one-key wire envelope.
///
/// Anything that is not a one-key object is returned as a literal; an
/// object with no key at all is malformed for a recognized shape and
/// surfaces as a [`CodecError::Deserialization`].
pub fn deserialize(value: &JsonValue) -> CodecResult<Decoded> {
    let JsonValue::Object(map) = value else {
        return Ok(literal(value));
    };
    if map.is_empty() {
        return Err(CodecError::deserialization(
            "envelope object carries no entity key",
        ));
    }
    if map.len() != 1 {
        return Ok(literal(value));
    }
    match map.iter().next() {
        Some((name, payload)) => deserialize_value(TypeRegistry::global(), name, payload, true),
        None => Ok(literal(value)),
    }
}

/// Deserializes an unwrapped payload against an explicit short-name hint,
/// as a parent serialize call would for one of its properties.
pub fn deserialize_named(name: &str, payload: &JsonValue) -> CodecResult<Decoded> {
    deserialize_value(TypeRegistry::global(), name, payload, true)
}

fn serialize_with(entity: &dyn Entity, ctx: &ServiceContext) -> CodecResult<JsonValue> {
    let mut out = JsonMap::new();
    for descriptor in schema_for(entity.properties(), ctx.kind()) {
        let Some(value) = entity.get(descriptor.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        out.insert(descriptor.name.to_string(), value_to_json(value, ctx)?);
    }
    Ok(JsonValue::Object(out))
}

fn value_to_json(value: &Value, ctx: &ServiceContext) -> CodecResult<JsonValue> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => JsonValue::Number(n.clone()),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Date(d) => JsonValue::String(format_date(*d)),
        Value::DateTime(dt) => JsonValue::String(format_datetime(*dt)),
        Value::Entity(e) => serialize_with(e.as_ref(), ctx)?,
        Value::List(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| value_to_json(item, ctx))
                .collect::<CodecResult<_>>()?,
        ),
        Value::Map(pairs) => {
            let mut out = JsonMap::new();
            for (key, item) in pairs {
                out.insert(key.clone(), value_to_json(item, ctx)?);
            }
            JsonValue::Object(out)
        }
    })
}

fn deserialize_value(
    registry: &TypeRegistry,
    name: &str,
    payload: &JsonValue,
    root: bool,
) -> CodecResult<Decoded> {
    let Some(entity_type) = registry.resolve(name) else {
        // Unknown short name. Fatal only at the root of a structured
        // payload; in child position the value degrades to passthrough.
        if is_empty_object(payload) {
            return Ok(Decoded::Null);
        }
        if root && is_structured(payload) {
            return Err(CodecError::EntityNotFound(name.to_string()));
        }
        return Ok(literal(payload));
    };

    // Wire convention: "field present but empty" arrives as `{}`.
    if is_empty_object(payload) {
        return Ok(Decoded::Null);
    }

    match payload {
        JsonValue::Array(items) => {
            // Siblings of the same type, each independently re-wrapped.
            let decoded = items
                .iter()
                .map(|item| deserialize_value(registry, name, item, false))
                .collect::<CodecResult<Vec<_>>>()?;
            Ok(Decoded::List(decoded))
        }
        JsonValue::Object(map) => deserialize_fields(registry, entity_type, map),
        other => Ok(literal(other)),
    }
}

fn deserialize_fields(
    registry: &TypeRegistry,
    entity_type: &EntityType,
    map: &JsonMap<String, JsonValue>,
) -> CodecResult<Decoded> {
    let mut entity = entity_type.instantiate();

    // Declared properties first, from the type's default table —
    // deserialization happens before a service context is known.
    for descriptor in entity_type.properties {
        let Some(raw) = map.get(descriptor.name) else {
            continue;
        };
        let value = field_value(registry, entity_type, descriptor, raw)?;
        entity.set(descriptor.name, value)?;
    }

    // Whatever the schema does not model is retained as an opaque leaf,
    // never dropped and never fatal.
    for (key, raw) in map {
        if entity_type.properties.iter().any(|d| d.name == key.as_str()) {
            continue;
        }
        debug!(
            entity = entity_type.name,
            field = %key,
            "retaining unknown wire field as opaque value"
        );
        entity.set(key, Value::from_json(raw))?;
    }

    Ok(Decoded::Entity(entity))
}

fn field_value(
    registry: &TypeRegistry,
    entity_type: &EntityType,
    descriptor: &PropertyDescriptor,
    raw: &JsonValue,
) -> CodecResult<Value> {
    if raw.is_null() || is_empty_object(raw) {
        return Ok(Value::Null);
    }

    match descriptor.kind {
        PropertyKind::Date => match raw {
            JsonValue::String(s) => Ok(Value::Date(parse_date(descriptor.name, s)?)),
            _ => Err(CodecError::InvalidArgument(format!(
                "property `{}`: expected a date string",
                descriptor.name
            ))),
        },
        PropertyKind::DateTime => match raw {
            JsonValue::String(s) => Ok(Value::DateTime(parse_datetime(descriptor.name, s)?)),
            _ => Err(CodecError::InvalidArgument(format!(
                "property `{}`: expected a timestamp string",
                descriptor.name
            ))),
        },
        PropertyKind::ScalarList => {
            // A lone scalar is the legacy encoding of a one-element list.
            let items: Vec<Value> = match raw {
                JsonValue::Array(items) => items.iter().map(Value::from_json).collect(),
                other => vec![Value::from_json(other)],
            };
            Ok(Value::List(items))
        }
        _ => {
            if let Some(singular) = resolve_collection(entity_type, descriptor.name) {
                collection_value(registry, singular, raw)
            } else {
                // Single value, deserialized against the property's own
                // name as hint.
                Ok(deserialize_value(registry, descriptor.name, raw, false)?.into_value())
            }
        }
    }
}

fn collection_value(
    registry: &TypeRegistry,
    singular: &'static str,
    raw: &JsonValue,
) -> CodecResult<Value> {
    let items: Vec<&JsonValue> = match raw {
        JsonValue::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if registry.resolve(singular).is_some() {
            out.push(deserialize_value(registry, singular, item, false)?.into_value());
        } else {
            // Element type unknown to the registry: keep the raw shape.
            out.push(Value::from_json(item));
        }
    }
    Ok(Value::List(out))
}

fn literal(value: &JsonValue) -> Decoded {
    match value {
        JsonValue::Null => Decoded::Null,
        other => Decoded::Scalar(Value::from_json(other)),
    }
}

fn is_empty_object(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Object(map) if map.is_empty())
}

fn is_structured(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Object(_) | JsonValue::Array(_))
}
