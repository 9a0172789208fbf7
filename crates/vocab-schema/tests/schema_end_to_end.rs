//! End-to-end flow: load a configuration document, generate the schema
//! fragment from it, and resolve a node's extension properties for a
//! selected display language.

use serde_json::json;
use vocab_schema::{generate_schema, resolve_properties, RenderedValue, VocabularyConfig};

const CONFIG: &str = r#"
languages: [en, fr]
custom_properties:
  - id: acronym
    label: Acronym
    type: plain
    classes: [Concept]
  - id: definition_source
    label: Definition source
    type: languageMap
    classes: [Concept]
  - id: usage_examples
    label: Usage examples
    type: languageMapArray
    classes: [Concept]
"#;

#[test]
fn generated_schema_reflects_the_loaded_configuration() {
    let config = VocabularyConfig::from_yaml_str(CONFIG).unwrap();
    let schema = generate_schema(&config.languages, &config.custom_properties);

    // The Concept block carries the custom fields after its base fields,
    // comma separated; the other entity blocks stay untouched.
    assert!(schema.contains(
        "isReplacedBy: [Concept], acronym: String, \
         definition_source: LanguageMap, usage_examples: LanguageMapArray\n}"
    ));
    assert!(schema.contains("member: [Concept] @link(from: \"member___NODE\")\n}"));
    assert!(schema.contains("publisher: Concept\n}"));

    // Auxiliary types expose exactly the configured languages.
    assert!(schema.contains("type LanguageMap {\n  en: String, fr: String\n}"));
    assert!(schema.contains("type LanguageMapArray {\n  en: [String], fr: [String]\n}"));
}

#[test]
fn node_properties_resolve_for_the_selected_language() {
    let config = VocabularyConfig::from_yaml_str(CONFIG).unwrap();
    let node = json!({
        "type": "Concept",
        "prefLabel": {"en": "Cat", "fr": "Chat"},
        "acronym": "CAT",
        "definition_source": {"en": "Oxford", "fr": "Larousse"},
        "usage_examples": {"en": ["the cat sat"], "fr": []}
    });

    let french = resolve_properties(&config.custom_properties, Some(&node), Some("fr"));
    let labels: Vec<&str> = french.iter().map(|entry| entry.label.as_str()).collect();
    // The usage examples list is empty in French, so that entry drops out.
    assert_eq!(labels, ["Acronym", "Definition source"]);
    assert_eq!(french[1].value, RenderedValue::Text("Larousse".to_string()));

    let english = resolve_properties(&config.custom_properties, Some(&node), Some("en"));
    assert_eq!(english.len(), 3);
    assert_eq!(
        english[2].value,
        RenderedValue::List(vec!["the cat sat".to_string()])
    );
}

#[test]
fn regenerating_after_a_language_change_reshapes_the_auxiliary_types() {
    let config = VocabularyConfig::from_yaml_str(CONFIG).unwrap();
    let before = generate_schema(&config.languages, &config.custom_properties);
    assert!(before.contains("type LanguageMap {\n  en: String, fr: String\n}"));

    let reduced = VocabularyConfig::from_json_str(r#"{"languages": ["de"]}"#).unwrap();
    let after = generate_schema(&reduced.languages, &config.custom_properties);
    // No trace of the previous language set survives a regeneration.
    assert!(after.contains("type LanguageMap {\n  de: String\n}"));
    assert!(!after.contains("en: String"));
    assert!(!after.contains("fr: String"));
}
