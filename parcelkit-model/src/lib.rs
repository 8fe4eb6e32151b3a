//! Entity contract and static metadata for parcelkit.
//!
//! This crate defines everything the codecs consume but do not own:
//!
//! - [`Entity`] — the capability contract (uid, service context,
//!   property enumeration, get/set by name)
//! - [`PropertyDescriptor`] / [`schema_for`] — the per-(type, service)
//!   property schema registry, derived from `&'static` tables
//! - [`TypeRegistry`] — short-name → type resolution over the logical
//!   namespaces, in fixed precedence order
//! - [`ServiceContext`] — active service contract + namespace map
//! - [`Value`] — the dynamically typed property value union
//! - the built-in carrier entity catalogue under [`entities`]
//!
//! The codecs themselves live in `parcelkit-codec`.

mod entity;
mod error;
mod macros;
mod property;
mod registry;
mod service;
mod value;

pub mod entities;

pub use entity::{Entity, EntityBase};
pub use error::ModelError;
pub use property::{schema_for, PropertyDescriptor, PropertyKind};
pub use registry::{EntityType, LogicalNamespace, TypeRegistry, NAMESPACE_SEARCH_ORDER};
pub use service::{
    NamespaceKey, ServiceContext, ServiceKind, NS_ARRAYS, NS_COMMON, NS_ENVELOPE, NS_SCHEMA,
    NS_SECURITY,
};
pub use value::Value;

// Re-exported so generated entity impls (and downstream crates) need only
// this crate in scope.
pub use parcelkit_types::EntityUid;
