//! # Property Resolver
//!
//! Resolves a node's extension property values for display in a selected
//! language. Nodes arrive from the host content-graph system as dynamic
//! records, so the resolver works over `serde_json::Value` and extracts
//! language-shaped values through the typed maps in `vocab-core`.
//!
//! ## Silent degrade
//!
//! Every failure mode produces an omitted entry rather than an error:
//! absent fields, empty values, malformed shapes, and language misses all
//! skip the descriptor. Output order equals descriptor input order; no
//! reordering or deduplication happens.

use serde::Serialize;
use serde_json::Value;

use vocab_core::{LanguageMap, LanguageMapArray, PropertyDescriptor, PropertyKind};

/// A rendered property value, ready for presentation.
///
/// Serializes untagged: a text value becomes a JSON string, a list value a
/// JSON array, which is the shape the presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderedValue {
    /// Inline text.
    Text(String),
    /// An enumerated list, one visual item per entry in original order.
    List(Vec<String>),
}

/// One resolved property: the descriptor's label (the heading) and its
/// rendered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProperty {
    /// Display name from the descriptor.
    pub label: String,
    /// The value rendered for the selected language.
    pub value: RenderedValue,
}

/// Resolve each descriptor's value on `node` for the given display
/// language, in descriptor order.
///
/// An absent `node` yields an empty result. Descriptors whose value is
/// absent, empty, malformed for the descriptor's kind, or missing the
/// requested language produce no entry.
pub fn resolve_properties(
    properties: &[PropertyDescriptor],
    node: Option<&Value>,
    language: Option<&str>,
) -> Vec<ResolvedProperty> {
    let Some(node) = node else {
        return Vec::new();
    };

    properties
        .iter()
        .filter_map(|prop| resolve_property(prop, node, language))
        .collect()
}

/// Resolve a single descriptor against the node, or `None` to skip it.
fn resolve_property(
    prop: &PropertyDescriptor,
    node: &Value,
    language: Option<&str>,
) -> Option<ResolvedProperty> {
    let value = match node.get(prop.id.as_str()) {
        Some(value) if !is_empty_value(value) => value,
        _ => {
            tracing::trace!(id = %prop.id, "skipping property with absent or empty value");
            return None;
        }
    };

    let rendered = match prop.kind {
        PropertyKind::LanguageMap => {
            let map: LanguageMap = serde_json::from_value(value.clone()).ok()?;
            RenderedValue::Text(map.get(language?)?.to_string())
        }
        PropertyKind::LanguageMapArray => {
            let map: LanguageMapArray = serde_json::from_value(value.clone()).ok()?;
            RenderedValue::List(map.get(language?)?.to_vec())
        }
        PropertyKind::Plain => match value {
            Value::String(text) => RenderedValue::Text(text.clone()),
            // Non-string scalars render via their JSON text.
            other => RenderedValue::Text(other.to_string()),
        },
    };

    match rendered {
        RenderedValue::Text(text) if text.is_empty() => None,
        RenderedValue::List(items) if items.is_empty() => None,
        rendered => Some(ResolvedProperty {
            label: prop.label.clone(),
            value: rendered,
        }),
    }
}

/// Explicit emptiness predicate: null, zero-length string, zero-length
/// array, or zero-length object. Everything else counts as present.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
