//! Index building for project documents
//!
//! # Error Handling Strategy
//!
//! The indexer separates per-record findings from environment failures:
//!
//! - **Record-level findings**: unreadable or malformed files, missing attributes, key/slug
//!   collisions and oversized bedroom ranges become [`Diagnostic`](crate::models::Diagnostic)s
//!   in the [`BuildReport`]. They never stop the run; a malformed file is simply absent from
//!   the index.
//!
//! - **Environment failures**: only persisting the document can fail (directory creation,
//!   write, rename). These propagate as `anyhow::Error` and abort before any output is
//!   left in place.
//!
//! - **Summary reporting**: the report carries counts of indexed and skipped files for
//!   the caller to print.

pub mod assembler;
pub mod builder;

pub use assembler::{assemble_document, detect_collisions};
pub use builder::{BuildReport, build_entry, build_index, generate_index};
