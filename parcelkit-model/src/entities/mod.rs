//! Built-in carrier entity catalogue.
//!
//! A representative subset of the carrier's contract, grouped by logical
//! namespace. Adding a type means adding its table + `carrier_entity!`
//! block and one `register` line in [`builtin_registry`].

mod domain;
mod envelope;
mod message;
mod request;
mod response;

pub use domain::{
    Address, Amount, Barcode, Content, Customer, Customs, Dimension, Location, OldStatus,
    OpeningHours, Shipment, Status, Warning,
};
pub use envelope::{Security, UsernameToken};
pub use message::Message;
pub use request::{CompleteStatus, GenerateBarcode};
pub use response::{CompleteStatusResponse, GenerateBarcodeResponse};

use crate::TypeRegistry;

/// Registry over every built-in entity type.
///
/// Registration order within a namespace is first-match-wins, mirroring
/// the resolver's namespace precedence for colliding short names.
pub(crate) fn builtin_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();

    // Domain
    registry.register(Address::entity_type());
    registry.register(Amount::entity_type());
    registry.register(Barcode::entity_type());
    registry.register(Content::entity_type());
    registry.register(Customer::entity_type());
    registry.register(Customs::entity_type());
    registry.register(Dimension::entity_type());
    registry.register(Location::entity_type());
    registry.register(OpeningHours::entity_type());
    registry.register(Status::entity_type());
    registry.register(OldStatus::entity_type());
    registry.register(Shipment::entity_type());
    registry.register(Warning::entity_type());

    // Message
    registry.register(Message::entity_type());

    // Request
    registry.register(GenerateBarcode::entity_type());
    registry.register(CompleteStatus::entity_type());

    // Response
    registry.register(GenerateBarcodeResponse::entity_type());
    registry.register(CompleteStatusResponse::entity_type());

    // Envelope
    registry.register(UsernameToken::entity_type());
    registry.register(Security::entity_type());

    registry
}
