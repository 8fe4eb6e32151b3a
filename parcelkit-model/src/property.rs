//! Static property metadata.
//!
//! Every entity type carries one `&'static [PropertyDescriptor]` table in
//! field declaration order. The tables are the schema registry: built at
//! compile time, shared read-only by all instances, never mutated.

use crate::{NamespaceKey, ServiceKind};

/// Declared value kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Opaque scalar (string or number on the wire).
    Scalar,
    /// Boolean; rendered as the literal strings `"true"`/`"false"` in XML.
    Bool,
    /// Date-only field (`dd-mm-yyyy` on the wire).
    Date,
    /// Timestamp field (`dd-mm-yyyy HH:MM:SS` on the wire).
    DateTime,
    /// Single nested entity of the named type.
    Entity(&'static str),
    /// Repeated primitive values (array-of-string wire shape).
    ScalarList,
    /// Repeated nested entities of the named type.
    EntityList(&'static str),
}

/// Immutable description of one declared property of an entity type.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub kind: PropertyKind,
    /// Service contracts this property applies to. Empty means all.
    pub services: &'static [ServiceKind],
    /// Logical namespace the property is qualified under in SOAP output.
    pub namespace: NamespaceKey,
}

impl PropertyDescriptor {
    pub const fn scalar(name: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::Scalar)
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::Bool)
    }

    pub const fn date(name: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::Date)
    }

    pub const fn datetime(name: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::DateTime)
    }

    pub const fn nested(name: &'static str, target: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::Entity(target))
    }

    pub const fn nested_list(name: &'static str, target: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::EntityList(target))
    }

    pub const fn scalar_list(name: &'static str) -> Self {
        Self::with_kind(name, PropertyKind::ScalarList)
    }

    const fn with_kind(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            kind,
            services: &[],
            namespace: NamespaceKey::Domain,
        }
    }

    /// Restricts the property to the given service contracts.
    pub const fn in_services(mut self, services: &'static [ServiceKind]) -> Self {
        self.services = services;
        self
    }

    /// Overrides the wire namespace key (default is `Domain`).
    pub const fn with_namespace(mut self, namespace: NamespaceKey) -> Self {
        self.namespace = namespace;
        self
    }

    /// Whether this property is visible under the given service contract.
    #[must_use]
    pub fn applies_to(&self, service: ServiceKind) -> bool {
        self.services.is_empty() || self.services.contains(&service)
    }

    /// Element type name if this property is a nested-entity collection.
    #[must_use]
    pub fn collection_target(&self) -> Option<&'static str> {
        match self.kind {
            PropertyKind::EntityList(target) => Some(target),
            _ => None,
        }
    }

    /// True for both scalar and entity collections.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(
            self.kind,
            PropertyKind::ScalarList | PropertyKind::EntityList(_)
        )
    }
}

/// The properties of a type visible under one service contract, in
/// declaration order. An empty table yields an empty schema, not an
/// error; such entities only traverse as literal values.
#[must_use]
pub fn schema_for(
    properties: &'static [PropertyDescriptor],
    service: ServiceKind,
) -> Vec<&'static PropertyDescriptor> {
    properties.iter().filter(|p| p.applies_to(service)).collect()
}
