//! SOAP envelope entities (WS-Security header).

use crate::{carrier_entity, NamespaceKey, PropertyDescriptor};

static USERNAME_TOKEN_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("Username").with_namespace(NamespaceKey::Security),
    PropertyDescriptor::scalar("Password").with_namespace(NamespaceKey::Security),
];

carrier_entity! {
    /// WS-Security username/password token.
    pub struct UsernameToken in Envelope {
        properties = USERNAME_TOKEN_PROPERTIES;
    }
}

static SECURITY_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::nested("UsernameToken", "UsernameToken")
        .with_namespace(NamespaceKey::Security),
];

carrier_entity! {
    /// WS-Security SOAP header.
    pub struct Security in Envelope {
        properties = SECURITY_PROPERTIES;
    }
}
