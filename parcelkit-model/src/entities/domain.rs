//! Domain entities shared across the webservice family.
//!
//! Field lists are data, not logic: each table mirrors the carrier's
//! contract for the services that expose the type. Declaration order is
//! wire output order and must not be shuffled.

use crate::{carrier_entity, ModelError, PropertyDescriptor, ServiceKind, Value};

const ADDRESS_SERVICES: &[ServiceKind] = &[
    ServiceKind::Barcode,
    ServiceKind::Confirming,
    ServiceKind::Labelling,
    ServiceKind::DeliveryDate,
    ServiceKind::LocationLookup,
    ServiceKind::Timeframe,
];
const LABEL_SERVICES: &[ServiceKind] = &[ServiceKind::Confirming, ServiceKind::Labelling];
const SHIPMENT_SERVICES: &[ServiceKind] = &[
    ServiceKind::Confirming,
    ServiceKind::Labelling,
    ServiceKind::ShippingStatus,
];
const STATUS_SERVICES: &[ServiceKind] = &[ServiceKind::ShippingStatus];
const CHECKOUT_SERVICES: &[ServiceKind] = &[
    ServiceKind::DeliveryDate,
    ServiceKind::LocationLookup,
    ServiceKind::Timeframe,
];

static ADDRESS_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("AddressType").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Area").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Buildingname").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("City").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("CompanyName").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Countrycode").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Department").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Doorcode").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("FirstName").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Floor").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("HouseNr").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("HouseNrExt").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Name").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Region").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Remark").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Street").in_services(ADDRESS_SERVICES),
    PropertyDescriptor::scalar("Zipcode").in_services(ADDRESS_SERVICES),
];

/// The carrier rejects zipcodes with inner whitespace or lowercase
/// letters, so the setter normalizes rather than pushing the chore onto
/// every caller. The codecs always deliver the raw wire string here;
/// anything other than a string (or an absent value) is malformed.
fn normalize_address(name: &str, value: Value) -> Result<Value, ModelError> {
    if name == "Zipcode" {
        return match value {
            Value::String(raw) => {
                let cleaned: String = raw
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_uppercase();
                Ok(Value::String(cleaned))
            }
            Value::Null => Ok(Value::Null),
            _ => Err(ModelError::invalid("Zipcode", "expected a string value")),
        };
    }
    Ok(value)
}

carrier_entity! {
    /// Sender, receiver or pickup address.
    pub struct Address in Domain {
        properties = ADDRESS_PROPERTIES;
        normalize = normalize_address;
    }
}

static AMOUNT_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("AccountName").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("AmountType").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("BIC").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Currency").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("IBAN").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Reference").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("TransactionNumber").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Value").in_services(LABEL_SERVICES),
];

carrier_entity! {
    /// Monetary amount attached to a shipment (COD, insured value).
    pub struct Amount in Domain {
        properties = AMOUNT_PROPERTIES;
    }
}

static BARCODE_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Type").in_services(&[ServiceKind::Barcode]),
    PropertyDescriptor::scalar("Range").in_services(&[ServiceKind::Barcode]),
    PropertyDescriptor::scalar("Serie").in_services(&[ServiceKind::Barcode]),
];

carrier_entity! {
    /// Barcode range parameters for number generation.
    pub struct Barcode in Domain {
        properties = BARCODE_PROPERTIES;
    }
}

static CONTENT_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Description").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("CountryOfOrigin").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("HSTariffNr").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Quantity").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Value").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Weight").in_services(LABEL_SERVICES),
];

carrier_entity! {
    /// One customs declaration line.
    pub struct Content in Domain {
        properties = CONTENT_PROPERTIES;
    }
}

const CUSTOMER_SERVICES: &[ServiceKind] = &[
    ServiceKind::Barcode,
    ServiceKind::Confirming,
    ServiceKind::Labelling,
];

static CUSTOMER_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::nested("Address", "Address").in_services(CUSTOMER_SERVICES),
    PropertyDescriptor::scalar("CollectionLocation").in_services(CUSTOMER_SERVICES),
    PropertyDescriptor::scalar("ContactPerson").in_services(CUSTOMER_SERVICES),
    PropertyDescriptor::scalar("CustomerCode").in_services(CUSTOMER_SERVICES),
    PropertyDescriptor::scalar("CustomerNumber").in_services(CUSTOMER_SERVICES),
    PropertyDescriptor::scalar("Email").in_services(CUSTOMER_SERVICES),
    PropertyDescriptor::scalar("Name").in_services(CUSTOMER_SERVICES),
];

carrier_entity! {
    /// Contract holder on whose behalf a call is made.
    pub struct Customer in Domain {
        properties = CUSTOMER_PROPERTIES;
    }
}

static CUSTOMS_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Certificate").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("CertificateNr").in_services(LABEL_SERVICES),
    PropertyDescriptor::nested_list("Content", "Content").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Currency").in_services(LABEL_SERVICES),
    PropertyDescriptor::boolean("HandleAsNonDeliverable").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Invoice").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("InvoiceNr").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("License").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("LicenseNr").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("ShipmentType").in_services(LABEL_SERVICES),
];

carrier_entity! {
    /// Customs declaration for cross-border shipments.
    pub struct Customs in Domain {
        properties = CUSTOMS_PROPERTIES;
    }
}

static DIMENSION_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Height").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Length").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Volume").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Weight").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Width").in_services(LABEL_SERVICES),
];

carrier_entity! {
    /// Parcel dimensions in millimetres and grams.
    pub struct Dimension in Domain {
        properties = DIMENSION_PROPERTIES;
    }
}

static LOCATION_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::boolean("AllowSundaySorting").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::scalar("City").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::date("DeliveryDate").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::scalar_list("DeliveryOptions").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::scalar("HouseNr").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::scalar_list("Options").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::scalar("Postalcode").in_services(CHECKOUT_SERVICES),
    PropertyDescriptor::scalar("Street").in_services(CHECKOUT_SERVICES),
];

carrier_entity! {
    /// Pickup-point lookup parameters.
    pub struct Location in Domain {
        properties = LOCATION_PROPERTIES;
    }
}

static OPENING_HOURS_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Monday").in_services(&[ServiceKind::LocationLookup]),
    PropertyDescriptor::scalar("Tuesday").in_services(&[ServiceKind::LocationLookup]),
    PropertyDescriptor::scalar("Wednesday").in_services(&[ServiceKind::LocationLookup]),
    PropertyDescriptor::scalar("Thursday").in_services(&[ServiceKind::LocationLookup]),
    PropertyDescriptor::scalar("Friday").in_services(&[ServiceKind::LocationLookup]),
    PropertyDescriptor::scalar("Saturday").in_services(&[ServiceKind::LocationLookup]),
    PropertyDescriptor::scalar("Sunday").in_services(&[ServiceKind::LocationLookup]),
];

carrier_entity! {
    /// Weekly opening hours of a pickup point.
    pub struct OpeningHours in Domain {
        properties = OPENING_HOURS_PROPERTIES;
    }
}

static STATUS_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("CurrentPhaseCode").in_services(STATUS_SERVICES),
    PropertyDescriptor::scalar("CurrentPhaseDescription").in_services(STATUS_SERVICES),
    PropertyDescriptor::scalar("CurrentStatusCode").in_services(STATUS_SERVICES),
    PropertyDescriptor::scalar("CurrentStatusDescription").in_services(STATUS_SERVICES),
    PropertyDescriptor::datetime("CurrentStatusTimeStamp").in_services(STATUS_SERVICES),
];

carrier_entity! {
    /// Current track-and-trace status of a shipment.
    pub struct Status in Domain {
        properties = STATUS_PROPERTIES;
    }
}

static OLD_STATUS_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Code").in_services(STATUS_SERVICES),
    PropertyDescriptor::scalar("Description").in_services(STATUS_SERVICES),
    PropertyDescriptor::scalar("PhaseCode").in_services(STATUS_SERVICES),
    PropertyDescriptor::scalar("PhaseDescription").in_services(STATUS_SERVICES),
    PropertyDescriptor::datetime("TimeStamp").in_services(STATUS_SERVICES),
];

carrier_entity! {
    /// Historical track-and-trace status entry.
    pub struct OldStatus in Domain {
        properties = OLD_STATUS_PROPERTIES;
    }
}

static SHIPMENT_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::nested_list("Addresses", "Address").in_services(SHIPMENT_SERVICES),
    PropertyDescriptor::nested_list("Amounts", "Amount").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Barcode").in_services(SHIPMENT_SERVICES),
    PropertyDescriptor::datetime("CollectionTimeStampStart").in_services(LABEL_SERVICES),
    PropertyDescriptor::datetime("CollectionTimeStampEnd").in_services(LABEL_SERVICES),
    PropertyDescriptor::nested("Customs", "Customs").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("DeliveryAddress").in_services(LABEL_SERVICES),
    PropertyDescriptor::date("DeliveryDate").in_services(SHIPMENT_SERVICES),
    PropertyDescriptor::nested("Dimension", "Dimension").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("ProductCodeDelivery").in_services(LABEL_SERVICES),
    PropertyDescriptor::scalar("Reference").in_services(SHIPMENT_SERVICES),
    PropertyDescriptor::scalar("Remark").in_services(LABEL_SERVICES),
    PropertyDescriptor::nested_list("Statuses", "Status").in_services(STATUS_SERVICES),
    PropertyDescriptor::nested_list("OldStatuses", "OldStatus").in_services(STATUS_SERVICES),
];

carrier_entity! {
    /// One parcel: label data on the way out, status data on the way in.
    pub struct Shipment in Domain {
        properties = SHIPMENT_PROPERTIES;
    }
}

static WARNING_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Code")
        .in_services(&[ServiceKind::Labelling, ServiceKind::ShippingStatus]),
    PropertyDescriptor::scalar("Description")
        .in_services(&[ServiceKind::Labelling, ServiceKind::ShippingStatus]),
];

carrier_entity! {
    /// Non-fatal warning attached to a response.
    pub struct Warning in Domain {
        properties = WARNING_PROPERTIES;
    }
}
