//! # vocab-core — Foundational Types for the Vocabulary Stack
//!
//! Defines the domain primitives shared by the vocabulary graph tooling:
//! language tags and per-language value maps, plus the taxonomy of
//! extension properties that shape the generated schema. Every other crate
//! in the workspace depends on `vocab-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`LanguageTag`] and
//!    [`PropertyId`] validate their shape at construction time. No bare
//!    strings for identifiers that end up in schema text.
//!
//! 2. **Closed enums for closed sets.** [`EntityKind`] and
//!    [`PropertyKind`] are exhaustive; permissive input handling lives
//!    only at the serde boundary.
//!
//! 3. **Deterministic iteration.** Sets and maps keyed by language tag are
//!    B-tree backed, so everything derived from them is reproducible.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vocab-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` and round-trip through
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod language;
pub mod property;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use language::{LanguageMap, LanguageMapArray, LanguageSet, LanguageTag};
pub use property::{EntityKind, PropertyDescriptor, PropertyId, PropertyKind};
