//! Generic XML node-list shape.
//!
//! The XML parser (an external collaborator) hands the codec a tree of
//! `{name, value}` nodes where a value is either character data or a list
//! of child nodes. The codec never receives richer typing than this; all
//! entity-aware interpretation happens in `parcelkit-codec`.

use serde::{Deserialize, Serialize};

/// One parsed XML element: a (possibly namespace-qualified) name plus
/// either character data or child elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireNode {
    pub name: String,
    pub value: WireValue,
}

impl WireNode {
    /// A leaf element carrying character data.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: WireValue::Text(text.into()),
        }
    }

    /// An element with child elements.
    pub fn nested(name: impl Into<String>, children: Vec<WireNode>) -> Self {
        Self {
            name: name.into(),
            value: WireValue::Nodes(children),
        }
    }

    /// An empty element (`<Foo/>` or `<Foo></Foo>`).
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: WireValue::Empty,
        }
    }

    /// The element name with any namespace qualification stripped.
    #[must_use]
    pub fn local_name(&self) -> &str {
        strip_namespace(&self.name)
    }
}

/// The value of a [`WireNode`]: absent, character data, or child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Text(String),
    Nodes(Vec<WireNode>),
    Empty,
}

impl WireValue {
    /// True for empty elements and empty character data — the shapes the
    /// legacy encoder uses for "no value".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            WireValue::Empty => true,
            WireValue::Text(s) => s.is_empty(),
            WireValue::Nodes(nodes) => nodes.is_empty(),
        }
    }

    /// Character data, if this is a leaf value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            WireValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Child nodes, if this is a nested value.
    #[must_use]
    pub fn as_nodes(&self) -> Option<&[WireNode]> {
        match self {
            WireValue::Nodes(nodes) => Some(nodes),
            _ => None,
        }
    }
}

/// Strips namespace qualification from a wire element name.
///
/// The parser resolves tag prefixes to URIs and emits Clark notation
/// (`{uri}Local`); names that escaped resolution keep their `pre:Local`
/// form. Both are reduced to the bare local name here.
#[must_use]
pub fn strip_namespace(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix('{') {
        if let Some(idx) = rest.find('}') {
            return &rest[idx + 1..];
        }
    }
    match name.rfind(':') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}
