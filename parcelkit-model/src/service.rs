//! Service contracts and their namespace maps.
//!
//! Each webservice in the carrier family exposes a different property
//! subset of the same entities under its own XML namespaces. The active
//! [`ServiceContext`] on an entity decides which properties are visible
//! and which wire prefixes the SOAP codec qualifies them with.

use serde::{Deserialize, Serialize};

/// Identity of one webservice contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    Barcode,
    Confirming,
    Labelling,
    ShippingStatus,
    DeliveryDate,
    LocationLookup,
    Timeframe,
}

impl ServiceKind {
    /// Webservice name as it appears in the carrier's namespace URIs.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            ServiceKind::Barcode => "BarcodeWebService",
            ServiceKind::Confirming => "ConfirmingWebService",
            ServiceKind::Labelling => "LabellingWebService",
            ServiceKind::ShippingStatus => "ShippingStatusWebService",
            ServiceKind::DeliveryDate => "DeliveryDateWebService",
            ServiceKind::LocationLookup => "LocationWebService",
            ServiceKind::Timeframe => "TimeframeWebService",
        }
    }
}

/// Logical namespace key a property's wire qualification is looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamespaceKey {
    Envelope,
    Security,
    Services,
    Domain,
    Common,
    Schema,
    Arrays,
}

/// SOAP 1.1 envelope namespace.
pub const NS_ENVELOPE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
/// WS-Security extension namespace (username-token authentication).
pub const NS_SECURITY: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";
/// XML Schema instance namespace (`xsi:nil` and friends).
pub const NS_SCHEMA: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// Serialization namespace the legacy encoder uses for arrays of primitives.
pub const NS_ARRAYS: &str = "http://schemas.microsoft.com/2003/10/Serialization/Arrays";
/// Types shared by every service in the family.
pub const NS_COMMON: &str = "http://parcelkit.example/cif/common/";

const NS_BASE: &str = "http://parcelkit.example/cif/";

/// The service contract currently governing an entity, plus the mapping
/// from logical namespace keys to wire URIs for that service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceContext {
    kind: ServiceKind,
    namespaces: Vec<(NamespaceKey, String)>,
}

impl ServiceContext {
    /// Context with the service's built-in namespace map.
    #[must_use]
    pub fn new(kind: ServiceKind) -> Self {
        Self {
            kind,
            namespaces: default_namespaces(kind),
        }
    }

    /// Context with a caller-supplied namespace map (test endpoints,
    /// sandbox environments).
    #[must_use]
    pub fn with_namespaces(kind: ServiceKind, namespaces: Vec<(NamespaceKey, String)>) -> Self {
        Self { kind, namespaces }
    }

    #[must_use]
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Wire URI for a logical namespace key, if the map defines one.
    #[must_use]
    pub fn namespace(&self, key: NamespaceKey) -> Option<&str> {
        self.namespaces
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, uri)| uri.as_str())
    }
}

fn default_namespaces(kind: ServiceKind) -> Vec<(NamespaceKey, String)> {
    let service = kind.wire_name();
    vec![
        (NamespaceKey::Envelope, NS_ENVELOPE.to_string()),
        (NamespaceKey::Security, NS_SECURITY.to_string()),
        (NamespaceKey::Services, format!("{NS_BASE}services/{service}/")),
        (NamespaceKey::Domain, format!("{NS_BASE}domain/{service}/")),
        (NamespaceKey::Common, NS_COMMON.to_string()),
        (NamespaceKey::Schema, NS_SCHEMA.to_string()),
        (NamespaceKey::Arrays, NS_ARRAYS.to_string()),
    ]
}
