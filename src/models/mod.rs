//! Data models for the project search index.
//!
//! This module defines the data structures that flow through the pipeline:
//!
//! - [`SourceRecord`] - Raw, untyped project document as read from disk
//! - [`IndexEntry`] - Normalized, token-augmented projection of one record
//! - [`IndexDocument`] - Versioned, timestamped collection of all entries
//! - [`Diagnostic`] - Per-file findings returned alongside each stage's output
//!
//! Source records are kept as `serde_json::Value` at the boundary and converted by the
//! normalizer into strictly-typed entries, so every optional field is explicit.

pub mod diagnostic;
pub mod document;
pub mod entry;
pub mod record;

pub use diagnostic::{Diagnostic, DiagnosticKind, MissingField, Severity};
pub use document::{INDEX_FORMAT_VERSION, IndexDocument};
pub use entry::IndexEntry;
pub use record::SourceRecord;
