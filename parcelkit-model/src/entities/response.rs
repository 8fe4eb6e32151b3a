//! Response root entities.

use crate::{carrier_entity, PropertyDescriptor, ServiceKind};

static GENERATE_BARCODE_RESPONSE_PROPERTIES: &[PropertyDescriptor] = &[
    // Scalar: the reserved number itself, not the domain `Barcode` entity.
    PropertyDescriptor::scalar("Barcode").in_services(&[ServiceKind::Barcode]),
];

carrier_entity! {
    /// Reply to a `GenerateBarcode` call.
    pub struct GenerateBarcodeResponse in Response {
        properties = GENERATE_BARCODE_RESPONSE_PROPERTIES;
    }
}

static COMPLETE_STATUS_RESPONSE_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::nested_list("Shipments", "Shipment")
        .in_services(&[ServiceKind::ShippingStatus]),
    PropertyDescriptor::nested_list("Warnings", "Warning")
        .in_services(&[ServiceKind::ShippingStatus]),
];

carrier_entity! {
    /// Reply to a `CompleteStatus` call.
    pub struct CompleteStatusResponse in Response {
        properties = COMPLETE_STATUS_RESPONSE_PROPERTIES;
    }
}
