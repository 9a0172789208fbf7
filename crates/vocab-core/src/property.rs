//! # Extension Property Taxonomy
//!
//! Configuration-side types describing extension properties: the
//! identifier emitted into the generated schema, the human-readable label,
//! the value shape, and the entity kinds the property attaches to.
//!
//! ## Permissive kind parsing
//!
//! Upstream configuration data spells the value shape as `"languageMap"`
//! or `"languageMapArray"` and leaves the field absent (or arbitrary) for
//! plain strings. [`PropertyKind`]'s `Deserialize` preserves that
//! behavior: anything unrecognized becomes [`PropertyKind::Plain`]. The
//! permissiveness is confined to the parse boundary; in memory the
//! taxonomy is a closed enum, so downstream `match`es are exhaustive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for PropertyId ------------------------------------

impl<'de> Deserialize<'de> for PropertyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// An extension property identifier, emitted verbatim as a schema field
/// name.
///
/// # Validation
///
/// Must match `[A-Za-z_][A-Za-z0-9_]*` so every generated type block stays
/// a syntactically valid schema fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyId(String);

impl PropertyId {
    /// Create a property identifier, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPropertyId`] if the string is
    /// empty, starts with a digit, or contains anything other than ASCII
    /// alphanumerics and underscores.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let mut chars = value.chars();
        let head_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !(head_ok && tail_ok) {
            return Err(ValidationError::InvalidPropertyId(value));
        }
        Ok(Self(value))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Value shape of an extension property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    /// A single string; schema type `String`.
    #[default]
    Plain,
    /// One string per language; schema type `LanguageMap`.
    LanguageMap,
    /// One ordered string list per language; schema type
    /// `LanguageMapArray`.
    LanguageMapArray,
}

impl PropertyKind {
    /// The schema type name this kind maps to in generated type blocks.
    pub fn schema_type_name(self) -> &'static str {
        match self {
            Self::Plain => "String",
            Self::LanguageMap => "LanguageMap",
            Self::LanguageMapArray => "LanguageMapArray",
        }
    }
}

impl<'de> Deserialize<'de> for PropertyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "languageMap" => Self::LanguageMap,
            "languageMapArray" => Self::LanguageMapArray,
            // Unrecognized spellings degrade to plain, matching the data
            // this configuration format grew up with.
            _ => Self::Plain,
        })
    }
}

/// The closed set of vocabulary entity kinds.
///
/// Each kind has a hardcoded base field list in the generated schema;
/// extension properties contribute additional fields per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A SKOS collection: an unordered grouping of concepts.
    Collection,
    /// A SKOS concept scheme: the aggregation a vocabulary publishes.
    ConceptScheme,
    /// A SKOS concept: one unit of thought in the vocabulary.
    Concept,
}

impl EntityKind {
    /// All entity kinds, in schema emission order.
    pub const ALL: [EntityKind; 3] = [Self::Collection, Self::ConceptScheme, Self::Concept];

    /// The type name as it appears in schema text and in descriptor
    /// `classes` lists.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "Collection",
            Self::ConceptScheme => "ConceptScheme",
            Self::Concept => "Concept",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Collection" => Ok(Self::Collection),
            "ConceptScheme" => Ok(Self::ConceptScheme),
            "Concept" => Ok(Self::Concept),
            other => Err(ValidationError::UnknownEntityKind(other.to_string())),
        }
    }
}

/// One extension property from the configuration.
///
/// `classes` stays a list of raw strings: a name matching no entity kind
/// simply never contributes a field, which is not an error. Descriptors
/// are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Unique identifier, emitted verbatim as the schema field name.
    pub id: PropertyId,
    /// Display name, used as the rendered heading.
    pub label: String,
    /// Value shape. The wire field is `type`; absent means plain.
    #[serde(rename = "type", default)]
    pub kind: PropertyKind,
    /// Entity kind names this property attaches to.
    #[serde(default)]
    pub classes: Vec<String>,
}

impl PropertyDescriptor {
    /// Whether this property attaches to the given entity kind.
    pub fn applies_to(&self, kind: EntityKind) -> bool {
        self.classes.iter().any(|class| class == kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_id_accepts_field_shaped_identifiers() {
        for ok in ["acronym", "dc_title", "_internal", "note2"] {
            assert_eq!(PropertyId::new(ok).unwrap().as_str(), ok);
        }
    }

    #[test]
    fn property_id_rejects_non_identifiers() {
        for bad in ["", "9abc", "has space", "dash-ed", "ünïcode"] {
            assert!(PropertyId::new(bad).is_err(), "expected rejection of {bad:?}");
        }
    }

    #[test]
    fn kind_maps_to_fixed_schema_type_table() {
        assert_eq!(PropertyKind::Plain.schema_type_name(), "String");
        assert_eq!(PropertyKind::LanguageMap.schema_type_name(), "LanguageMap");
        assert_eq!(
            PropertyKind::LanguageMapArray.schema_type_name(),
            "LanguageMapArray"
        );
    }

    #[test]
    fn kind_parses_known_spellings_and_degrades_unknown_to_plain() {
        let known: PropertyKind = serde_json::from_value(json!("languageMap")).unwrap();
        assert_eq!(known, PropertyKind::LanguageMap);

        let arrays: PropertyKind = serde_json::from_value(json!("languageMapArray")).unwrap();
        assert_eq!(arrays, PropertyKind::LanguageMapArray);

        for unknown in ["string", "LANGUAGEMAP", "localized", ""] {
            let kind: PropertyKind = serde_json::from_value(json!(unknown)).unwrap();
            assert_eq!(kind, PropertyKind::Plain, "spelling {unknown:?}");
        }
    }

    #[test]
    fn descriptor_deserializes_from_wire_shape() {
        let descriptor: PropertyDescriptor = serde_json::from_value(json!({
            "id": "acronym",
            "label": "Acronym",
            "type": "plain",
            "classes": ["Concept"]
        }))
        .unwrap();
        assert_eq!(descriptor.id.as_str(), "acronym");
        assert_eq!(descriptor.kind, PropertyKind::Plain);
        assert!(descriptor.applies_to(EntityKind::Concept));
        assert!(!descriptor.applies_to(EntityKind::Collection));
    }

    #[test]
    fn descriptor_defaults_absent_type_and_classes() {
        let descriptor: PropertyDescriptor = serde_json::from_value(json!({
            "id": "source",
            "label": "Source"
        }))
        .unwrap();
        assert_eq!(descriptor.kind, PropertyKind::Plain);
        assert!(descriptor.classes.is_empty());
    }

    #[test]
    fn descriptor_with_unknown_class_never_applies() {
        let descriptor: PropertyDescriptor = serde_json::from_value(json!({
            "id": "x",
            "label": "X",
            "classes": ["Thesaurus"]
        }))
        .unwrap();
        for kind in EntityKind::ALL {
            assert!(!descriptor.applies_to(kind));
        }
    }

    #[test]
    fn entity_kind_round_trips_through_its_name() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("Scheme".parse::<EntityKind>().is_err());
    }
}
