//! Message header entity.

use crate::{carrier_entity, PropertyDescriptor};

static MESSAGE_PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::scalar("MessageID"),
    PropertyDescriptor::datetime("MessageTimeStamp"),
];

carrier_entity! {
    /// Per-call message header; every service accepts it, so the
    /// applicability set is unrestricted.
    pub struct Message in Message {
        properties = MESSAGE_PROPERTIES;
    }
}
