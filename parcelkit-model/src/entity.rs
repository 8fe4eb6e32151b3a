//! The entity capability contract.
//!
//! The codecs read and write named fields on arbitrary entities without
//! static knowledge of the concrete type. Every entity implements
//! [`Entity`]; the `carrier_entity!` macro generates the dispatch
//! boilerplate so per-entity code stays declarative.

use crate::{ModelError, PropertyDescriptor, ServiceContext, Value};
use parcelkit_types::EntityUid;
use std::any::Any;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

/// Uniform, duck-typed access to a typed domain object.
pub trait Entity: fmt::Debug + Send {
    /// Short wire name (`Address`, `Shipment`, ...).
    fn entity_name(&self) -> &'static str;

    /// Stable identifier assigned at construction.
    fn uid(&self) -> EntityUid;

    /// The active service contract, if one has been set.
    fn service(&self) -> Option<&ServiceContext>;

    /// Activates a service contract; must happen before serialization.
    fn set_service(&mut self, ctx: ServiceContext);

    /// Default property table of this type, in declaration order.
    fn properties(&self) -> &'static [PropertyDescriptor];

    /// Reads a field by name; falls back to the additional-properties bag.
    fn get(&self, name: &str) -> Option<&Value>;

    /// Writes a field by name. Names outside the declared set land in the
    /// additional-properties bag rather than failing.
    fn set(&mut self, name: &str, value: Value) -> Result<(), ModelError>;

    fn clone_box(&self) -> Box<dyn Entity>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Entity> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Shared field storage behind every generated entity.
///
/// Declared fields are keyed by their `&'static` descriptor name;
/// everything else goes to the ordered additional-properties map so
/// unknown wire fields survive a decode instead of being dropped.
#[derive(Debug, Clone)]
pub struct EntityBase {
    uid: EntityUid,
    service: Option<ServiceContext>,
    fields: HashMap<&'static str, Value>,
    additional: BTreeMap<String, Value>,
}

impl EntityBase {
    #[must_use]
    pub fn new() -> Self {
        Self {
            uid: EntityUid::new(),
            service: None,
            fields: HashMap::new(),
            additional: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn uid(&self) -> EntityUid {
        self.uid
    }

    #[must_use]
    pub fn service(&self) -> Option<&ServiceContext> {
        self.service.as_ref()
    }

    pub fn set_service(&mut self, ctx: ServiceContext) {
        self.service = Some(ctx);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).or_else(|| self.additional.get(name))
    }

    /// Stores `value` under the declared field if `name` is in
    /// `descriptors`, otherwise in the additional-properties bag.
    pub fn set(
        &mut self,
        descriptors: &'static [PropertyDescriptor],
        name: &str,
        value: Value,
    ) -> Result<(), ModelError> {
        match descriptors.iter().find(|d| d.name == name) {
            Some(descriptor) => {
                self.fields.insert(descriptor.name, value);
            }
            None => {
                self.additional.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Wire fields this type does not declare, in name order.
    #[must_use]
    pub fn additional_properties(&self) -> &BTreeMap<String, Value> {
        &self.additional
    }
}

impl Default for EntityBase {
    fn default() -> Self {
        Self::new()
    }
}
