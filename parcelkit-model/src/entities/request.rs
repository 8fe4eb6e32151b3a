//! Request root entities.

use crate::{carrier_entity, PropertyDescriptor, ServiceKind};

static GENERATE_BARCODE_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::nested("Message", "Message").in_services(&[ServiceKind::Barcode]),
    PropertyDescriptor::nested("Customer", "Customer").in_services(&[ServiceKind::Barcode]),
    PropertyDescriptor::nested("Barcode", "Barcode").in_services(&[ServiceKind::Barcode]),
];

carrier_entity! {
    /// Barcode number reservation call.
    pub struct GenerateBarcode in Request {
        properties = GENERATE_BARCODE_PROPERTIES;
    }
}

static COMPLETE_STATUS_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::nested("Message", "Message").in_services(&[ServiceKind::ShippingStatus]),
    PropertyDescriptor::nested("Customer", "Customer").in_services(&[ServiceKind::ShippingStatus]),
    PropertyDescriptor::nested("Shipment", "Shipment").in_services(&[ServiceKind::ShippingStatus]),
];

carrier_entity! {
    /// Full track-and-trace history request for one shipment.
    pub struct CompleteStatus in Request {
        properties = COMPLETE_STATUS_PROPERTIES;
    }
}
