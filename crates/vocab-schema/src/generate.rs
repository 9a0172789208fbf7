//! # Schema Generator
//!
//! Emits the schema-language fragment the host content-graph system
//! consumes: three entity type blocks (`Collection`, `ConceptScheme`,
//! `Concept`) with hardcoded base field lists plus configuration-shaped
//! custom fields, and the two language-shaped auxiliary types
//! (`LanguageMap`, `LanguageMapArray`) regenerated from the active
//! language set on every call. Pure text production; no I/O, no errors.
//!
//! ## Determinism
//!
//! Identical inputs yield byte-identical output. Custom fields appear in
//! descriptor declaration order; language fields appear in the set's
//! lexicographic order.
//!
//! ## Link directives
//!
//! Relationship fields carry `@link(from: "<field>___NODE")` annotations.
//! The host resolves graph edges through that storage-key suffix, so the
//! directive text is reproduced verbatim and must not be reformatted.

use vocab_core::{EntityKind, LanguageSet, PropertyDescriptor};

/// Language code emitted when the configured language set is empty.
pub const DEFAULT_LANGUAGE: &str = "en";

const COLLECTION_FIELDS: &str = r#"  type: String,
  prefLabel: LanguageMap,
  member: [Concept] @link(from: "member___NODE")"#;

const CONCEPT_SCHEME_FIELDS: &str = r#"  type: String,
  title: LanguageMap,
  dc_title: LanguageMap,
  prefLabel: LanguageMap,
  description: LanguageMap,
  dc_description: LanguageMap,
  hasTopConcept: [Concept] @link(from: "hasTopConcept___NODE"),
  languages: [String],
  issued: String,
  preferredNamespaceUri: String,
  preferredNamespacePrefix: String,
  publisher: Concept"#;

const CONCEPT_FIELDS: &str = r#"  type: String,
  prefLabel: LanguageMap,
  altLabel: LanguageMapArray,
  hiddenLabel: LanguageMapArray,
  definition: LanguageMap,
  note: LanguageMapArray,
  changeNote: LanguageMapArray,
  editorialNote: LanguageMapArray,
  historyNote: LanguageMapArray,
  scopeNote: LanguageMapArray,
  notation: [String],
  example: LanguageMap,
  topConceptOf: [ConceptScheme] @link(from: "topConceptOf___NODE"),
  narrower: [Concept] @link(from: "narrower___NODE"),
  narrowerTransitive: [Concept] @link(from: "narrowerTransitive___NODE"),
  narrowMatch: [Concept],
  broader: Concept @link(from: "broader___NODE"),
  broaderTransitive: [Concept] @link(from: "broaderTransitive___NODE"),
  broadMatch: [Concept],
  related: [Concept] @link(from: "related___NODE"),
  relatedMatch: [Concept],
  closeMatch: [Concept],
  exactMatch: [Concept],
  inScheme: [ConceptScheme] @link(from: "inScheme___NODE"),
  inSchemeAll: [ConceptScheme],
  hub: String,
  deprecated: Boolean,
  isReplacedBy: [Concept]"#;

/// Generate the full schema fragment for the given languages and
/// extension properties.
///
/// `languages` may be empty: the auxiliary types then expose a single
/// [`DEFAULT_LANGUAGE`] field. `properties` may be empty (no custom fields
/// are emitted anywhere), and descriptors whose `classes` name no real
/// entity kind never match and are silently ignored.
pub fn generate_schema(languages: &LanguageSet, properties: &[PropertyDescriptor]) -> String {
    tracing::debug!(
        languages = languages.len(),
        properties = properties.len(),
        "generating vocabulary schema"
    );

    let mut blocks: Vec<String> = EntityKind::ALL
        .iter()
        .map(|kind| entity_block(*kind, properties))
        .collect();
    blocks.push(language_block("LanguageMap", "String", languages));
    blocks.push(language_block("LanguageMapArray", "[String]", languages));
    blocks.join("\n")
}

/// The hardcoded base field list for one entity kind.
fn base_fields(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Collection => COLLECTION_FIELDS,
        EntityKind::ConceptScheme => CONCEPT_SCHEME_FIELDS,
        EntityKind::Concept => CONCEPT_FIELDS,
    }
}

/// One entity type block: the hardcoded base fields followed by the
/// custom-field suffix for this kind.
fn entity_block(kind: EntityKind, properties: &[PropertyDescriptor]) -> String {
    format!(
        "type {kind} implements Node {{\n{base}{custom}\n}}\n",
        base = base_fields(kind),
        custom = custom_field_suffix(kind, properties),
    )
}

/// Custom-field suffix for one entity kind: `", id: Type, ..."` in
/// descriptor order, or the empty string when nothing applies. The leading
/// separator keeps the base field list untouched when no custom fields
/// exist.
fn custom_field_suffix(kind: EntityKind, properties: &[PropertyDescriptor]) -> String {
    let fields: Vec<String> = properties
        .iter()
        .filter(|prop| prop.applies_to(kind))
        .map(|prop| format!("{}: {}", prop.id, prop.kind.schema_type_name()))
        .collect();

    if fields.is_empty() {
        String::new()
    } else {
        format!(", {}", fields.join(", "))
    }
}

/// One auxiliary type block with a `code: <value_type>` field per active
/// language, falling back to [`DEFAULT_LANGUAGE`] when the set is empty.
fn language_block(type_name: &str, value_type: &str, languages: &LanguageSet) -> String {
    let fields = if languages.is_empty() {
        format!("{DEFAULT_LANGUAGE}: {value_type}")
    } else {
        languages
            .iter()
            .map(|tag| format!("{tag}: {value_type}"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("type {type_name} {{\n  {fields}\n}}\n")
}
