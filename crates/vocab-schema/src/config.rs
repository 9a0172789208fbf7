//! # Configuration Loading
//!
//! Serde shape and loaders for the external configuration document both
//! components read: the active language set and the ordered list of
//! extension property descriptors.
//!
//! ## Validation
//!
//! Language tags and property identifiers validate inside their newtypes'
//! `Deserialize`, so a malformed identifier is a load-time error here
//! rather than malformed schema text later. Unknown property `type`
//! spellings stay permissive (they degrade to plain), matching the
//! upstream configuration format.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vocab_core::{LanguageSet, PropertyDescriptor};

/// Failure while loading a configuration document.
///
/// Both variants cover parse errors and newtype validation rejections,
/// which surface through the serde error path.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML document failed to parse or validate.
    #[error("failed to load YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document failed to parse or validate.
    #[error("failed to load JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// The external configuration object.
///
/// Loaded once at startup and treated as immutable for the process
/// lifetime. Both fields default to empty so a partial document loads
/// cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Active display languages. Empty means the generator falls back to a
    /// single default code.
    #[serde(default)]
    pub languages: LanguageSet,

    /// Extension property descriptors, in declaration order.
    #[serde(default)]
    pub custom_properties: Vec<PropertyDescriptor>,
}

impl VocabularyConfig {
    /// Load a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on parse failure or when a language
    /// tag or property identifier is rejected by its constructor.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on parse failure or when a language
    /// tag or property identifier is rejected by its constructor.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::{EntityKind, PropertyKind};

    #[test]
    fn loads_upstream_shaped_yaml() {
        let config = VocabularyConfig::from_yaml_str(
            r#"
languages: [en, fr]
custom_properties:
  - id: acronym
    label: Acronym
    classes: [Concept]
  - id: definition_source
    label: Definition source
    type: languageMap
    classes: [Concept, ConceptScheme]
"#,
        )
        .unwrap();

        assert_eq!(config.languages.len(), 2);
        assert!(config.languages.contains("fr"));

        let props = &config.custom_properties;
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].kind, PropertyKind::Plain);
        assert_eq!(props[1].kind, PropertyKind::LanguageMap);
        assert!(props[1].applies_to(EntityKind::ConceptScheme));
    }

    #[test]
    fn empty_document_loads_with_defaults() {
        let config = VocabularyConfig::from_json_str("{}").unwrap();
        assert!(config.languages.is_empty());
        assert!(config.custom_properties.is_empty());
    }

    #[test]
    fn malformed_property_id_is_a_load_error() {
        let result = VocabularyConfig::from_yaml_str(
            r#"
custom_properties:
  - id: "not an identifier"
    label: Broken
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn malformed_language_tag_is_a_load_error() {
        let result = VocabularyConfig::from_json_str(r#"{"languages": ["de_DE"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_type_spelling_degrades_to_plain_at_load() {
        let config = VocabularyConfig::from_json_str(
            r#"{"custom_properties": [{"id": "x", "label": "X", "type": "localizedText"}]}"#,
        )
        .unwrap();
        assert_eq!(config.custom_properties[0].kind, PropertyKind::Plain);
    }
}
