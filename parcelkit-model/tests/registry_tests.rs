use parcelkit_model::entities::{Address, Warning};
use parcelkit_model::{Entity, LogicalNamespace, TypeRegistry, NAMESPACE_SEARCH_ORDER};

// ── Search order ──────────────────────────────────────────────────

#[test]
fn namespace_search_order_is_fixed() {
    // Colliding short names resolve to the earliest namespace, so this
    // sequence is part of the wire contract.
    assert_eq!(
        NAMESPACE_SEARCH_ORDER,
        [
            LogicalNamespace::Domain,
            LogicalNamespace::Message,
            LogicalNamespace::Request,
            LogicalNamespace::Response,
            LogicalNamespace::Envelope,
        ]
    );
}

#[test]
fn domain_shadows_later_namespaces_on_collision() {
    let mut registry = TypeRegistry::new();

    // A response-namespace impostor registered before the domain type.
    let mut impostor = Warning::entity_type();
    impostor.name = "Address";
    impostor.namespace = LogicalNamespace::Response;
    registry.register(impostor);
    registry.register(Address::entity_type());

    let resolved = registry.resolve("Address").unwrap();
    assert_eq!(resolved.namespace, LogicalNamespace::Domain);
}

#[test]
fn first_registered_wins_within_a_namespace() {
    let mut registry = TypeRegistry::new();
    registry.register(Address::entity_type());

    let mut duplicate = Warning::entity_type();
    duplicate.name = "Address";
    registry.register(duplicate);

    let resolved = registry.resolve("Address").unwrap();
    assert_eq!(resolved.properties.len(), Address::entity_type().properties.len());
}

// ── Global registry ───────────────────────────────────────────────

#[test]
fn global_registry_resolves_builtin_types() {
    let registry = TypeRegistry::global();
    assert_eq!(
        registry.resolve("Address").unwrap().namespace,
        LogicalNamespace::Domain
    );
    assert_eq!(
        registry.resolve("Message").unwrap().namespace,
        LogicalNamespace::Message
    );
    assert_eq!(
        registry.resolve("GenerateBarcode").unwrap().namespace,
        LogicalNamespace::Request
    );
    assert_eq!(
        registry.resolve("CompleteStatusResponse").unwrap().namespace,
        LogicalNamespace::Response
    );
    assert_eq!(
        registry.resolve("Security").unwrap().namespace,
        LogicalNamespace::Envelope
    );
}

#[test]
fn unknown_short_name_is_not_fatal() {
    assert!(TypeRegistry::global().resolve("Frobnicator").is_none());
}

#[test]
fn resolve_in_probes_a_single_namespace() {
    let registry = TypeRegistry::global();
    assert!(registry
        .resolve_in(LogicalNamespace::Envelope, "Security")
        .is_some());
    assert!(registry
        .resolve_in(LogicalNamespace::Domain, "Security")
        .is_none());
}

#[test]
fn instantiate_builds_an_empty_instance() {
    let entity = TypeRegistry::global()
        .resolve("Shipment")
        .unwrap()
        .instantiate();
    assert_eq!(entity.entity_name(), "Shipment");
    assert!(entity.get("Barcode").is_none());
    assert!(entity.service().is_none());
}

#[test]
fn instantiated_uids_are_never_reused() {
    let entity_type = *TypeRegistry::global().resolve("Message").unwrap();
    let a = entity_type.instantiate();
    let b = entity_type.instantiate();
    assert_ne!(a.uid(), b.uid());
}
