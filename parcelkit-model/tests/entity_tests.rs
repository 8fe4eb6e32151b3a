use parcelkit_model::entities::{Address, Customer, Location};
use parcelkit_model::{Entity, ModelError, NamespaceKey, ServiceContext, ServiceKind, Value};
use pretty_assertions::assert_eq;

// ── Field access ──────────────────────────────────────────────────

#[test]
fn declared_fields_roundtrip_through_get_set() {
    let mut address = Address::new();
    address.set("City", Value::from("Hoofddorp")).unwrap();
    assert_eq!(address.get("City").and_then(Value::as_str), Some("Hoofddorp"));
}

#[test]
fn absent_fields_read_as_none() {
    let address = Address::new();
    assert!(address.get("City").is_none());
}

#[test]
fn undeclared_fields_land_in_the_additional_bag() {
    let mut address = Address::new();
    address.set("Frobnicator", Value::from("x")).unwrap();
    // Still reachable by name, so unknown wire data survives a decode.
    assert_eq!(
        address.get("Frobnicator").and_then(Value::as_str),
        Some("x")
    );
}

#[test]
fn zipcode_setter_normalizes_whitespace_and_case() {
    let mut address = Address::new();
    address.set("Zipcode", Value::from("2132 wt ")).unwrap();
    assert_eq!(address.get("Zipcode").and_then(Value::as_str), Some("2132WT"));
}

#[test]
fn zipcode_rejects_non_string_values() {
    let mut address = Address::new();
    let err = address
        .set("Zipcode", Value::Map(vec![("x".to_string(), Value::Null)]))
        .unwrap_err();
    assert!(matches!(err, ModelError::InvalidArgument { ref property, .. } if property == "Zipcode"));
    // Absent is fine; only a wrong shape is refused.
    address.set("Zipcode", Value::Null).unwrap();
}

#[test]
fn other_address_fields_are_not_normalized() {
    let mut address = Address::new();
    address.set("City", Value::from("den hoorn ")).unwrap();
    assert_eq!(
        address.get("City").and_then(Value::as_str),
        Some("den hoorn ")
    );
}

#[test]
fn nested_entity_values_are_reachable() {
    let mut customer = Customer::new();
    let mut address = Address::new();
    address.set("City", Value::from("Hoofddorp")).unwrap();
    customer
        .set("Address", Value::Entity(Box::new(address)))
        .unwrap();

    let nested = customer.get("Address").and_then(Value::as_entity).unwrap();
    assert_eq!(nested.entity_name(), "Address");
    assert_eq!(nested.get("City").and_then(Value::as_str), Some("Hoofddorp"));
}

// ── Identity and cloning ──────────────────────────────────────────

#[test]
fn uids_are_assigned_at_construction_and_distinct() {
    assert_ne!(Address::new().uid(), Address::new().uid());
}

#[test]
fn clone_box_preserves_fields() {
    let mut location = Location::new();
    location.set("City", Value::from("Delft")).unwrap();

    let boxed: Box<dyn Entity> = Box::new(location);
    let cloned = boxed.clone();
    assert_eq!(cloned.get("City").and_then(Value::as_str), Some("Delft"));
    // The clone is a distinct object with the original's uid preserved
    // through the base copy.
    assert_eq!(cloned.uid(), boxed.uid());
}

#[test]
fn downcast_through_as_any() {
    let boxed: Box<dyn Entity> = Box::new(Address::new());
    assert!(boxed.as_any().downcast_ref::<Address>().is_some());
    assert!(boxed.as_any().downcast_ref::<Customer>().is_none());
}

// ── Service context ───────────────────────────────────────────────

#[test]
fn service_context_starts_unset() {
    assert!(Address::new().service().is_none());
}

#[test]
fn set_service_activates_a_contract() {
    let mut address = Address::new();
    address.set_service(ServiceContext::new(ServiceKind::Labelling));
    assert_eq!(address.service().unwrap().kind(), ServiceKind::Labelling);
}

#[test]
fn builtin_namespace_map_covers_the_service_uris() {
    let ctx = ServiceContext::new(ServiceKind::Barcode);
    assert_eq!(
        ctx.namespace(NamespaceKey::Domain),
        Some("http://parcelkit.example/cif/domain/BarcodeWebService/")
    );
    assert_eq!(
        ctx.namespace(NamespaceKey::Services),
        Some("http://parcelkit.example/cif/services/BarcodeWebService/")
    );
    assert!(ctx.namespace(NamespaceKey::Arrays).is_some());
}

#[test]
fn caller_supplied_namespace_map_wins() {
    let ctx = ServiceContext::with_namespaces(
        ServiceKind::Labelling,
        vec![(NamespaceKey::Domain, "http://sandbox.example/".to_string())],
    );
    assert_eq!(ctx.namespace(NamespaceKey::Domain), Some("http://sandbox.example/"));
    assert_eq!(ctx.namespace(NamespaceKey::Envelope), None);
}
