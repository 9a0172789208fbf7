//! # Language Primitives
//!
//! Newtypes for language tags and per-language values. A [`LanguageTag`]
//! identifies one display language; [`LanguageSet`] is the configured set
//! of active languages; [`LanguageMap`] and [`LanguageMapArray`] carry one
//! value (or one value list) per language for a single vocabulary field.
//!
//! ## Validation
//!
//! [`LanguageTag`] is validated at construction time: non-empty ASCII
//! alphanumeric segments separated by single hyphens (`en`, `fr`, `pt-BR`).
//! Lookups into the maps never fail; an absent code yields `None`.
//!
//! ## Ordering
//!
//! Tags order lexicographically, which fixes the iteration order of every
//! set and map keyed by tag. Schema text generated from a [`LanguageSet`]
//! is therefore reproducible byte for byte.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for LanguageTag -----------------------------------

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A language code in the BCP 47 shape used by SKOS data (`en`, `fr`,
/// `pt-BR`).
///
/// # Validation
///
/// Must be non-empty ASCII alphanumeric segments separated by single
/// hyphens. Case is preserved as given; no region or script semantics are
/// imposed beyond the shape check.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a language tag, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLanguageTag`] if the string is
    /// empty, starts or ends with a hyphen, contains consecutive hyphens,
    /// or contains anything other than ASCII alphanumerics and hyphens.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let shape_ok = !value.is_empty()
            && value.split('-').all(|segment| {
                !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric())
            });
        if !shape_ok {
            return Err(ValidationError::InvalidLanguageTag(value));
        }
        Ok(Self(value))
    }

    /// Access the tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LanguageTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Lets sets and maps keyed by tag be queried with a plain `&str` code.
// Consistent with `Ord`/`Eq`/`Hash` because all three delegate to the
// inner `String`.
impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The set of active display languages.
///
/// May be empty; consumers that need at least one language substitute a
/// single default code themselves. Iteration is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSet(BTreeSet<LanguageTag>);

impl LanguageSet {
    /// Create an empty language set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: LanguageTag) -> bool {
        self.0.insert(tag)
    }

    /// Whether the given code is in the set.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    /// Whether the set holds no languages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of languages in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the tags in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.0.iter()
    }
}

impl FromIterator<LanguageTag> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = LanguageTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One string per language for a single field, e.g.
/// `{"en": "Cat", "fr": "Chat"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMap(BTreeMap<LanguageTag, String>);

impl LanguageMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a language. Returns the previous value, if any.
    pub fn insert(&mut self, tag: LanguageTag, value: impl Into<String>) -> Option<String> {
        self.0.insert(tag, value.into())
    }

    /// Look up the value for a language code. Absent codes yield `None`.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Whether the map holds no languages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of languages with a value.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// One ordered string list per language for a single field, e.g.
/// `{"en": ["a", "b"], "fr": []}`.
///
/// Lists for different languages may differ in length; no cross-language
/// alignment is assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMapArray(BTreeMap<LanguageTag, Vec<String>>);

impl LanguageMapArray {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value list for a language. Returns the previous list, if any.
    pub fn insert(&mut self, tag: LanguageTag, values: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(tag, values)
    }

    /// Look up the ordered value list for a language code. Absent codes
    /// yield `None`; a present code always yields a slice, possibly empty.
    pub fn get(&self, code: &str) -> Option<&[String]> {
        self.0.get(code).map(Vec::as_slice)
    }

    /// Whether the map holds no languages.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of languages with a value list.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
