//! Result union of a deserialize call.

use parcelkit_model::{Entity, Value};

/// What a deserialize call reconstructed: a typed entity, a list of
/// siblings, an opaque passthrough value, or nothing.
#[derive(Debug, Clone)]
pub enum Decoded {
    Entity(Box<dyn Entity>),
    List(Vec<Decoded>),
    Scalar(Value),
    Null,
}

impl Decoded {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Decoded::Null)
    }

    #[must_use]
    pub fn as_entity(&self) -> Option<&dyn Entity> {
        match self {
            Decoded::Entity(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_entity(self) -> Option<Box<dyn Entity>> {
        match self {
            Decoded::Entity(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Decoded]> {
        match self {
            Decoded::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Decoded::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Collapses into a property [`Value`] for assignment onto an entity.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Decoded::Entity(e) => Value::Entity(e),
            Decoded::List(items) => Value::List(items.into_iter().map(Decoded::into_value).collect()),
            Decoded::Scalar(v) => v,
            Decoded::Null => Value::Null,
        }
    }
}
