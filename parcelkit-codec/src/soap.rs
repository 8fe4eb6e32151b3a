//! SOAP/XML codec.
//!
//! Serialization emits an ordered, namespace-qualified structure for an
//! external XML writer. Deserialization consumes the parser's generic
//! `{name, value}` node list and reconstructs the typed graph.
//!
//! The legacy SOAP encoder does not mark collections distinctly from
//! single composite objects at the node level, so the inbound side
//! classifies each child purely from local shape. The decision order in
//! [`classify_child`], including the three hard-excluded composite
//! names, is a binding contract with recorded server responses; do not
//! "clean it up".

use crate::collections::resolve_wire_name;
use crate::dates::{format_date, format_datetime};
use crate::{CodecError, CodecResult, Decoded};
use parcelkit_model::{
    schema_for, Entity, EntityType, NamespaceKey, PropertyDescriptor, PropertyKind, ServiceContext,
    TypeRegistry, Value,
};
use parcelkit_types::{WireNode, WireValue};
use tracing::{debug, warn};

/// Composite field names that are never collections, no matter how
/// collection-shaped their node list looks.
const NON_COLLECTION_COMPOSITES: &[&str] = &["Customer", "OpeningHours", "Customs"];

/// Serializes an entity to a namespace-qualified structured value for an
/// injected XML writer. Keys are `{namespace-uri}PropertyName` in schema
/// declaration order; SOAP consumers depend on the sequence.
pub fn serialize(entity: &dyn Entity) -> CodecResult<Value> {
    let ctx = entity
        .service()
        .ok_or(CodecError::ServiceNotSet(entity.entity_name()))?;
    serialize_with(entity, ctx)
}

/// Deserializes a parsed node list into an entity or opaque scalar.
///
/// The parser does not wrap a lone child in an array of its own, so the
/// top level is normalized to a single root node before resolution.
pub fn deserialize(nodes: &[WireNode]) -> CodecResult<Decoded> {
    let registry = TypeRegistry::global();
    let root = match nodes {
        [] => return Err(CodecError::deserialization("empty node list")),
        [only] => only,
        _ => {
            return Err(CodecError::NotSupported(format!(
                "expected a single root node, got {}",
                nodes.len()
            )))
        }
    };
    deserialize_node(registry, root, true)
}

fn serialize_with(entity: &dyn Entity, ctx: &ServiceContext) -> CodecResult<Value> {
    let mut out = Vec::new();
    for descriptor in schema_for(entity.properties(), ctx.kind()) {
        let Some(value) = entity.get(descriptor.name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        let key = qualified(ctx, descriptor.namespace, descriptor.name)?;
        out.push((key, soap_value(value, descriptor, ctx)?));
    }
    Ok(Value::Map(out))
}

fn soap_value(
    value: &Value,
    descriptor: &PropertyDescriptor,
    ctx: &ServiceContext,
) -> CodecResult<Value> {
    match value {
        Value::Entity(e) => serialize_with(e.as_ref(), ctx),
        Value::List(items) => match descriptor.kind {
            PropertyKind::ScalarList => {
                // The legacy encoder represents arrays of primitives as
                // sequences of single-key `string` wrapper elements.
                let key = qualified(ctx, NamespaceKey::Arrays, "string")?;
                let wrapped = items
                    .iter()
                    .map(|item| Ok(Value::Map(vec![(key.clone(), soap_scalar(item)?)])))
                    .collect::<CodecResult<Vec<_>>>()?;
                Ok(Value::List(wrapped))
            }
            _ => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Entity(e) => {
                            let key =
                                qualified(ctx, descriptor.namespace, e.entity_name())?;
                            out.push(Value::Map(vec![(key, serialize_with(e.as_ref(), ctx)?)]));
                        }
                        other => out.push(soap_scalar(other)?),
                    }
                }
                Ok(Value::List(out))
            }
        },
        other => soap_scalar(other),
    }
}

fn soap_scalar(value: &Value) -> CodecResult<Value> {
    Ok(match value {
        Value::Null => Value::Null,
        // The wire wants literal strings, not schema booleans.
        Value::Bool(b) => Value::String(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Date(d) => Value::String(format_date(*d)),
        Value::DateTime(dt) => Value::String(format_datetime(*dt)),
        Value::Map(pairs) => Value::Map(pairs.clone()),
        Value::List(items) => Value::List(
            items
                .iter()
                .map(soap_scalar)
                .collect::<CodecResult<Vec<_>>>()?,
        ),
        Value::Entity(_) => {
            return Err(CodecError::NotSupported(
                "nested entity outside a declared entity property".to_string(),
            ))
        }
    })
}

fn qualified(ctx: &ServiceContext, key: NamespaceKey, name: &str) -> CodecResult<String> {
    let uri = ctx.namespace(key).ok_or_else(|| {
        CodecError::InvalidArgument(format!(
            "service context for {:?} defines no `{key:?}` namespace",
            ctx.kind()
        ))
    })?;
    Ok(format!("{{{uri}}}{name}"))
}

fn deserialize_node(registry: &TypeRegistry, node: &WireNode, root: bool) -> CodecResult<Decoded> {
    let short = node.local_name();
    match (registry.resolve(short), node.value.as_nodes()) {
        (Some(entity_type), Some(children)) => deserialize_fields(registry, entity_type, children),
        (None, Some(_)) if root => Err(CodecError::EntityNotFound(short.to_string())),
        _ => Ok(raw_decoded(&node.value)),
    }
}

fn deserialize_fields(
    registry: &TypeRegistry,
    entity_type: &EntityType,
    children: &[WireNode],
) -> CodecResult<Decoded> {
    let mut entity = entity_type.instantiate();
    for child in children {
        let name = child.local_name();
        let value = classify_child(registry, child, name)?;
        if let Err(cause) = entity.set(name, value) {
            return Err(CodecError::deserialization_caused_by(
                format!("cannot assign field `{name}` on `{}`", entity_type.name),
                cause.into(),
            ));
        }
    }
    Ok(Decoded::Entity(entity))
}

/// Decides, from local shape alone, whether a child node is an empty
/// leaf, a collection, a single nested entity, or an opaque value. The
/// order of these checks is load-bearing.
fn classify_child(registry: &TypeRegistry, child: &WireNode, name: &str) -> CodecResult<Value> {
    // Empty leaf elements carry their raw value straight through.
    if child.value.is_empty() {
        return Ok(raw_value(&child.value));
    }

    let resolved = resolve_wire_name(registry, name);

    if let (Some(entity_type), Some(items)) = (resolved, child.value.as_nodes()) {
        if !items.is_empty() && !NON_COLLECTION_COMPOSITES.contains(&name) {
            if items[0].value.as_nodes().is_none() {
                // A collection-shaped wrapper around one composite child:
                // the encoder dropped the item container, so the children
                // here are the single item's own fields.
                debug!(field = name, "collection-shaped node parsed as single entity");
                return Ok(deserialize_fields(registry, entity_type, items)?.into_value());
            }
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match &item.value {
                    WireValue::Text(text) => out.push(Value::Map(vec![(
                        item.local_name().to_string(),
                        Value::String(text.clone()),
                    )])),
                    WireValue::Empty => out.push(Value::Map(vec![(
                        item.local_name().to_string(),
                        Value::Null,
                    )])),
                    WireValue::Nodes(_) => {
                        out.push(deserialize_node(registry, item, false)?.into_value());
                    }
                }
            }
            return Ok(Value::List(out));
        }
    }

    // Not a collection: try a nested entity, fall back to the raw value.
    match deserialize_node(registry, child, false) {
        Ok(decoded) => Ok(decoded.into_value()),
        Err(cause) => {
            warn!(
                field = name,
                error = %cause,
                "nested deserialize failed; assigning raw node value"
            );
            Ok(raw_value(&child.value))
        }
    }
}

fn raw_decoded(value: &WireValue) -> Decoded {
    match value {
        WireValue::Empty => Decoded::Null,
        other => Decoded::Scalar(raw_value(other)),
    }
}

/// Entity-unaware conversion of a wire value, for passthrough.
fn raw_value(value: &WireValue) -> Value {
    match value {
        WireValue::Empty => Value::Null,
        WireValue::Text(s) => Value::String(s.clone()),
        WireValue::Nodes(nodes) => Value::Map(
            nodes
                .iter()
                .map(|n| (n.local_name().to_string(), raw_value(&n.value)))
                .collect(),
        ),
    }
}
