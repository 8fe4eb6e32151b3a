//! Schema-driven, bidirectional entity codecs for the carrier webservice
//! family.
//!
//! The same domain object serializes differently depending on which
//! service contract is active; deserialization reconstructs a typed
//! graph from untyped wire input without prior knowledge of the concrete
//! type beyond its element name.
//!
//! - [`json`] — one-key-envelope JSON codec
//! - [`soap`] — namespace-qualified SOAP codec over generic node lists
//! - [`collections`] — collection detection and plural-name resolution
//! - [`dates`] — the two wire date formats
//!
//! Both codecs are synchronous and stateless across calls; the only
//! shared state is the read-only type registry in `parcelkit-model`,
//! which is built once and safe to share across threads.

pub mod collections;
pub mod dates;
pub mod json;
pub mod soap;

mod decoded;
mod error;

pub use decoded::Decoded;
pub use error::{CodecError, CodecResult};
