//! Core type definitions for parcelkit.
//!
//! This crate defines the fundamental, service-agnostic types used by the
//! entity model and both codecs:
//! - Entity uids (UUID v7)
//! - The generic `{name, value}` node-list shape produced by the XML parser
//! - Namespace-prefix stripping for wire element names
//!
//! Everything entity-aware (property schemas, service contexts, the type
//! registry) belongs in `parcelkit-model`, not here.

mod uid;
mod wire;

pub use uid::EntityUid;
pub use wire::{strip_namespace, WireNode, WireValue};
