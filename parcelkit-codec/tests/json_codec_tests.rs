use chrono::NaiveDate;
use parcelkit_codec::{json, CodecError};
use parcelkit_model::entities::{Address, Customs, Shipment};
use parcelkit_model::{Entity, ServiceContext, ServiceKind, TypeRegistry, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

fn labelling() -> ServiceContext {
    ServiceContext::new(ServiceKind::Labelling)
}

// ── Serialization ─────────────────────────────────────────────────

#[test]
fn serialize_emits_present_fields_only() {
    let mut address = Address::new();
    address.set("City", Value::from("Hoofddorp")).unwrap();
    address.set("Street", Value::from("Siriusdreef")).unwrap();
    address.set_service(labelling());

    let out = json::serialize(&address).unwrap();
    assert_eq!(out, json!({"City": "Hoofddorp", "Street": "Siriusdreef"}));
}

#[test]
fn serialize_without_service_context_fails() {
    let shipment = Shipment::new();
    let err = json::serialize(&shipment).unwrap_err();
    assert!(matches!(err, CodecError::ServiceNotSet("Shipment")));
}

#[test]
fn every_entity_type_requires_a_service_context() {
    for entity_type in TypeRegistry::global().iter() {
        let entity = entity_type.instantiate();
        let err = json::serialize(entity.as_ref()).unwrap_err();
        assert!(matches!(err, CodecError::ServiceNotSet(_)));
    }
}

#[test]
fn envelope_invariant_hides_other_contexts() {
    let mut shipment = Shipment::new();
    shipment.set("Barcode", Value::from("3SDEVC287190")).unwrap();
    shipment
        .set("ProductCodeDelivery", Value::from("3085"))
        .unwrap();
    shipment
        .set(
            "Statuses",
            Value::List(vec![Value::Entity(Box::new(
                parcelkit_model::entities::Status::new(),
            ))]),
        )
        .unwrap();

    shipment.set_service(labelling());
    let out = json::serialize(&shipment).unwrap();
    assert!(out.get("Barcode").is_some());
    assert!(out.get("ProductCodeDelivery").is_some());
    // Declared for ShippingStatus only; must never leak into Labelling.
    assert!(out.get("Statuses").is_none());

    shipment.set_service(ServiceContext::new(ServiceKind::ShippingStatus));
    let out = json::serialize(&shipment).unwrap();
    assert!(out.get("Statuses").is_some());
    assert!(out.get("ProductCodeDelivery").is_none());
}

#[test]
fn serialize_formats_dates_and_timestamps() {
    let date = NaiveDate::from_ymd_opt(2026, 7, 3).unwrap();
    let mut shipment = Shipment::new();
    shipment.set("DeliveryDate", Value::Date(date)).unwrap();
    shipment
        .set(
            "CollectionTimeStampStart",
            Value::DateTime(date.and_hms_opt(9, 30, 0).unwrap()),
        )
        .unwrap();
    shipment.set_service(labelling());

    let out = json::serialize(&shipment).unwrap();
    assert_eq!(out["DeliveryDate"], json!("03-07-2026"));
    assert_eq!(out["CollectionTimeStampStart"], json!("03-07-2026 09:30:00"));
}

#[test]
fn nested_entities_compose_without_double_wrapping() {
    let mut address = Address::new();
    address.set("City", Value::from("Hoofddorp")).unwrap();
    let mut customer = parcelkit_model::entities::Customer::new();
    customer
        .set("Address", Value::Entity(Box::new(address)))
        .unwrap();
    customer.set("Name", Value::from("Parcelkit BV")).unwrap();
    customer.set_service(labelling());

    let out = json::serialize(&customer).unwrap();
    assert_eq!(
        out,
        json!({"Address": {"City": "Hoofddorp"}, "Name": "Parcelkit BV"})
    );
}

// ── Deserialization: envelope handling ────────────────────────────

#[test]
fn literal_payloads_pass_through() {
    let decoded = json::deserialize(&json!("3SDEVC287190")).unwrap();
    assert_eq!(
        decoded.as_scalar().and_then(Value::as_str),
        Some("3SDEVC287190")
    );
    assert!(json::deserialize(&json!(null)).unwrap().is_null());
}

#[test]
fn zero_key_envelope_is_malformed() {
    let err = json::deserialize(&json!({})).unwrap_err();
    assert!(matches!(err, CodecError::Deserialization { .. }));
}

#[test]
fn multi_key_object_is_a_literal_not_an_envelope() {
    let decoded = json::deserialize(&json!({"A": 1, "B": 2})).unwrap();
    assert!(decoded.as_scalar().is_some());
}

#[test]
fn unknown_root_with_structured_payload_surfaces() {
    let err = json::deserialize(&json!({"Frobnicator": {"X": 1}})).unwrap_err();
    assert!(matches!(err, CodecError::EntityNotFound(name) if name == "Frobnicator"));
}

#[test]
fn unknown_root_with_scalar_payload_passes_through() {
    let decoded = json::deserialize(&json!({"Frobnicator": "x"})).unwrap();
    assert_eq!(decoded.as_scalar().and_then(Value::as_str), Some("x"));
}

// ── Deserialization: entities ─────────────────────────────────────

#[test]
fn address_scenario_delivers_raw_strings_to_setters() {
    let payload = json!({"Zipcode": "2132 WT", "City": "Hoofddorp"});
    let decoded = json::deserialize_named("Address", &payload).unwrap();
    let address = decoded.as_entity().unwrap();

    // The codec hands the raw `"2132 WT"` to the setter; the normalized
    // result is the entity's contract, not the codec's.
    assert_eq!(address.get("Zipcode").and_then(Value::as_str), Some("2132WT"));
    assert_eq!(address.get("City").and_then(Value::as_str), Some("Hoofddorp"));
}

#[test]
fn unnormalized_setters_keep_the_raw_string() {
    let payload = json!({"Postalcode": "2132 wt", "City": "Hoofddorp"});
    let decoded = json::deserialize_named("Location", &payload).unwrap();
    let location = decoded.as_entity().unwrap();
    assert_eq!(
        location.get("Postalcode").and_then(Value::as_str),
        Some("2132 wt")
    );
}

#[test]
fn empty_object_field_deserializes_to_null() {
    let payload = json!({"Shipment": {"Customs": {}, "Barcode": "3SDEVC1"}});
    let decoded = json::deserialize(&payload).unwrap();
    let shipment = decoded.as_entity().unwrap();
    assert!(shipment.get("Customs").unwrap().is_null());
    assert_eq!(
        shipment.get("Barcode").and_then(Value::as_str),
        Some("3SDEVC1")
    );
}

#[test]
fn empty_object_payload_is_null() {
    assert!(json::deserialize(&json!({"Address": {}})).unwrap().is_null());
}

#[test]
fn unknown_fields_are_retained_as_opaque_leaves() {
    let payload = json!({"Shipment": {"Barcode": "3SDEVC1", "Frobnicator": {"a": 1}}});
    let decoded = json::deserialize(&payload).unwrap();
    let shipment = decoded.as_entity().unwrap();
    assert_eq!(
        shipment.get("Barcode").and_then(Value::as_str),
        Some("3SDEVC1")
    );
    // Present as an opaque value, neither dropped nor fatal.
    let opaque = shipment.get("Frobnicator").unwrap();
    assert!(opaque.as_map().is_some());
}

#[test]
fn array_payload_maps_to_sibling_entities() {
    let payload = json!({"Address": [{"City": "Delft"}, {"City": "Gouda"}]});
    let decoded = json::deserialize(&payload).unwrap();
    let items = decoded.as_list().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[1]
            .as_entity()
            .unwrap()
            .get("City")
            .and_then(Value::as_str),
        Some("Gouda")
    );
}

#[test]
fn entity_collections_normalize_a_lone_element() {
    // The legacy API drops the array wrapper around single items.
    let payload = json!({"Shipment": {"Addresses": {"City": "Delft"}}});
    let decoded = json::deserialize(&payload).unwrap();
    let shipment = decoded.as_entity().unwrap();
    let addresses = shipment.get("Addresses").and_then(Value::as_list).unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].as_entity().unwrap().entity_name(), "Address");
}

#[test]
fn scalar_lists_normalize_a_lone_scalar() {
    let payload = json!({"Location": {"DeliveryOptions": "PG"}});
    let decoded = json::deserialize(&payload).unwrap();
    let location = decoded.as_entity().unwrap();
    let options = location
        .get("DeliveryOptions")
        .and_then(Value::as_list)
        .unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].as_str(), Some("PG"));
}

#[test]
fn malformed_date_for_recognized_field_surfaces() {
    let payload = json!({"Shipment": {"DeliveryDate": "bogus"}});
    let err = json::deserialize(&payload).unwrap_err();
    assert!(matches!(err, CodecError::InvalidArgument(_)));
}

#[test]
fn timestamps_parse_into_datetime_values() {
    let payload = json!({"Message": {"MessageID": "1", "MessageTimeStamp": "15-06-2026 10:00:00"}});
    let decoded = json::deserialize(&payload).unwrap();
    let message = decoded.as_entity().unwrap();
    let ts = message
        .get("MessageTimeStamp")
        .and_then(Value::as_datetime)
        .unwrap();
    assert_eq!(
        ts,
        NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    );
}

// ── Round trips ───────────────────────────────────────────────────

#[test]
fn visible_properties_survive_a_round_trip() {
    let mut customs = Customs::new();
    customs.set("Currency", Value::from("EUR")).unwrap();
    customs.set("HandleAsNonDeliverable", Value::from(false)).unwrap();
    customs.set("ShipmentType", Value::from("Commercial Goods")).unwrap();
    customs.set_service(labelling());

    let wire = json!({"Customs": json::serialize(&customs).unwrap()});
    let decoded = json::deserialize(&wire).unwrap();
    let back = decoded.as_entity().unwrap();

    assert_eq!(back.get("Currency").and_then(Value::as_str), Some("EUR"));
    assert_eq!(
        back.get("HandleAsNonDeliverable").and_then(Value::as_bool),
        Some(false)
    );
    assert_eq!(
        back.get("ShipmentType").and_then(Value::as_str),
        Some("Commercial Goods")
    );
}

#[test]
fn nested_collections_survive_a_round_trip() {
    let mut shipment = Shipment::new();
    let mut a = Address::new();
    a.set("City", Value::from("Delft")).unwrap();
    let mut b = Address::new();
    b.set("City", Value::from("Gouda")).unwrap();
    shipment
        .set(
            "Addresses",
            Value::List(vec![Value::Entity(Box::new(a)), Value::Entity(Box::new(b))]),
        )
        .unwrap();
    shipment
        .set(
            "DeliveryDate",
            Value::Date(NaiveDate::from_ymd_opt(2026, 7, 3).unwrap()),
        )
        .unwrap();
    shipment.set_service(labelling());

    let wire = json!({"Shipment": json::serialize(&shipment).unwrap()});
    let decoded = json::deserialize(&wire).unwrap();
    let back = decoded.as_entity().unwrap();

    let addresses = back.get("Addresses").and_then(Value::as_list).unwrap();
    assert_eq!(addresses.len(), 2);
    assert_eq!(
        addresses[0].as_entity().unwrap().get("City").and_then(Value::as_str),
        Some("Delft")
    );
    assert_eq!(
        back.get("DeliveryDate").and_then(Value::as_date),
        Some(NaiveDate::from_ymd_opt(2026, 7, 3).unwrap())
    );
}

#[test]
fn deserialized_graphs_reserialize_under_the_root_context() {
    let wire = json!({"Message": {"MessageID": "7", "MessageTimeStamp": "15-06-2026 10:00:00"}});
    let mut message = json::deserialize(&wire).unwrap().into_entity().unwrap();
    message.set_service(ServiceContext::new(ServiceKind::Barcode));

    let out = json::serialize(message.as_ref()).unwrap();
    assert_eq!(out["MessageID"], json!("7"));
    assert_eq!(out["MessageTimeStamp"], json!("15-06-2026 10:00:00"));
}
