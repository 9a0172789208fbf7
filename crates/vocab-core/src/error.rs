//! # Validation Errors
//!
//! Construction-time failures raised by the `vocab-core` newtypes. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! Validation happens once, at the configuration boundary: a value that
//! constructs successfully is valid for the process lifetime. The schema
//! generator and the property resolver downstream are infallible and never
//! produce these errors.

use thiserror::Error;

/// A newtype constructor rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The language tag is empty or falls outside the BCP 47 shaped
    /// alphabet (ASCII alphanumeric segments separated by single hyphens).
    #[error("invalid language tag: {0:?}")]
    InvalidLanguageTag(String),

    /// The property identifier is not a legal schema field name.
    #[error("invalid property identifier: {0:?}")]
    InvalidPropertyId(String),

    /// The string names no known entity kind.
    #[error("unknown entity kind: {0:?}")]
    UnknownEntityKind(String),
}
