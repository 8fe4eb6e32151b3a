//! Collection heuristics.
//!
//! Decides whether a property is a collection (schema-driven) and maps
//! plural wire names to their singular entity type (name-driven, for the
//! XML path where no compile-time kind is available).

use parcelkit_model::{EntityType, TypeRegistry};
use tracing::debug;

/// Plural wire names the generic strip-trailing-`s` rule would mangle
/// (`Addresses` → `Addresse`). These encode quirks of the upstream wire
/// format, not a pluralization algorithm; the table is part of the
/// protocol contract and must be checked before the generic rule.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("Statuses", "Status"),
    ("Addresses", "Address"),
    ("OldStatuses", "OldStatus"),
];

/// Schema-driven collection check: the element type name if `property`
/// is declared as a nested-entity collection on `entity_type`.
#[must_use]
pub fn resolve_collection(entity_type: &EntityType, property: &str) -> Option<&'static str> {
    entity_type
        .properties
        .iter()
        .find(|d| d.name == property)
        .and_then(|d| d.collection_target())
}

/// Name-driven resolution with plural fallback, in binding order:
/// (a) the name as-is, (b) the irregular-plural table, (c) the name with
/// a trailing `s` stripped. Returns `None` when nothing resolves; callers
/// then treat the value as opaque.
#[must_use]
pub fn resolve_wire_name<'r>(registry: &'r TypeRegistry, name: &str) -> Option<&'r EntityType> {
    if let Some(entity_type) = registry.resolve(name) {
        return Some(entity_type);
    }

    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == name) {
        debug!(name, singular, "resolved wire name via irregular-plural table");
        return registry.resolve(singular);
    }

    if let Some(stem) = name.strip_suffix('s') {
        if let Some(entity_type) = registry.resolve(stem) {
            debug!(name, stem, "resolved wire name by stripping trailing `s`");
            return Some(entity_type);
        }
    }

    None
}
