//! Type resolution from short wire names.
//!
//! Replaces runtime "class exists?" probing with a static registry: each
//! entity type registers a factory under its short name and logical
//! namespace, and resolution walks the namespaces in a fixed precedence
//! order. Domain entities therefore shadow request/response entities of
//! the same short name; that ordering is part of the wire contract.

use crate::{schema_for, Entity, PropertyDescriptor, ServiceKind};
use std::sync::OnceLock;

/// Logical namespaces a short name is probed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalNamespace {
    Domain,
    Message,
    Request,
    Response,
    Envelope,
}

/// Resolution precedence. Must not be reordered: colliding short names
/// resolve to the earliest namespace that defines them.
pub const NAMESPACE_SEARCH_ORDER: [LogicalNamespace; 5] = [
    LogicalNamespace::Domain,
    LogicalNamespace::Message,
    LogicalNamespace::Request,
    LogicalNamespace::Response,
    LogicalNamespace::Envelope,
];

/// Registry entry for one concrete entity type.
#[derive(Debug, Clone, Copy)]
pub struct EntityType {
    pub name: &'static str,
    pub namespace: LogicalNamespace,
    pub properties: &'static [PropertyDescriptor],
    pub factory: fn() -> Box<dyn Entity>,
}

impl EntityType {
    /// Constructs an empty instance via the parameterless factory.
    #[must_use]
    pub fn instantiate(&self) -> Box<dyn Entity> {
        (self.factory)()
    }

    /// Properties visible under `service`, in declaration order.
    #[must_use]
    pub fn schema_for(&self, service: ServiceKind) -> Vec<&'static PropertyDescriptor> {
        schema_for(self.properties, service)
    }
}

/// Ordered short-name → type lookup over the logical namespaces.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: Vec<EntityType>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, entity_type: EntityType) {
        self.entries.push(entity_type);
    }

    /// Resolves a short name, probing namespaces in
    /// [`NAMESPACE_SEARCH_ORDER`]; first match wins. `None` is non-fatal
    /// for callers in child position — the value then traverses as an
    /// opaque scalar.
    #[must_use]
    pub fn resolve(&self, short_name: &str) -> Option<&EntityType> {
        NAMESPACE_SEARCH_ORDER
            .iter()
            .find_map(|ns| self.resolve_in(*ns, short_name))
    }

    /// Resolves a short name within a single namespace.
    #[must_use]
    pub fn resolve_in(&self, namespace: LogicalNamespace, short_name: &str) -> Option<&EntityType> {
        self.entries
            .iter()
            .find(|e| e.namespace == namespace && e.name == short_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityType> {
        self.entries.iter()
    }

    /// The registry of built-in carrier entities. Built once on first
    /// use; read-only afterwards, so it is safe to share across threads.
    #[must_use]
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(crate::entities::builtin_registry)
    }
}
