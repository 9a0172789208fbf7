//! # vocab-schema — Schema Generation & Property Resolution
//!
//! The two configuration-shaped components of the vocabulary stack:
//!
//! - **Schema generation** ([`generate`]): given the active language set
//!   and the extension property descriptors, emit the schema-language
//!   fragment the host content-graph system registers. The shape of the
//!   emitted types depends entirely on runtime configuration.
//!
//! - **Property resolution** ([`resolve`]): given a node, the descriptors
//!   applicable to it, and a display language, produce the renderable
//!   `{label, value}` entries, dropping absent and empty values.
//!
//! Both are stateless pure functions: no shared state, no I/O, no errors.
//! They meet only through the configuration they both read ([`config`]),
//! which is loaded once at startup and immutable afterwards.
//!
//! ## Design
//!
//! Generation is a builder over fixed entity-type templates with an
//! injected, filtered list of `(name, type)` pairs per kind; resolution is
//! a single pass in descriptor order with an explicit emptiness predicate.
//! Anything malformed degrades silently to an omitted field or entry. The
//! only fallible surface in this crate is configuration loading.

pub mod config;
pub mod generate;
pub mod resolve;

// Re-export primary entry points for ergonomic imports.
pub use config::{ConfigError, VocabularyConfig};
pub use generate::{generate_schema, DEFAULT_LANGUAGE};
pub use resolve::{resolve_properties, RenderedValue, ResolvedProperty};
