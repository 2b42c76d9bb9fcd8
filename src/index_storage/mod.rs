//! Persistent storage for the generated search index
//!
//! The index is a single pretty-printed JSON file (by convention
//! `data/search/search_index.json`). Each run replaces it completely: the new document is
//! written to a sibling `.tmp` file and renamed over the target, so readers see either the
//! previous index or the new one.

pub mod persistence;

pub use persistence::{load_index, write_index};
