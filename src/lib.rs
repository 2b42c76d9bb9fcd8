//! Project Search Index - pre-computed search data for real-estate project pages
//!
//! This library turns a directory of per-project JSON documents into one flat, versioned
//! index file consumed by a search feature. It supports:
//!
//! - Discovering and parsing project documents, skipping malformed files
//! - Normalizing loosely-typed `_search` metadata into canonical attributes
//! - Deriving a de-duplicated set of lowercase search tokens per project
//! - Assembling and atomically writing the index document
//!
//! It does not rank or answer queries; it only prepares the data a query engine consumes.
//!
//! # Example
//!
//! ```no_run
//! use project_search_index::{IndexPaths, generate_index};
//! use std::path::Path;
//!
//! let paths = IndexPaths::from_root(Path::new("/srv/site"));
//! let report = generate_index(&paths)?;
//! println!("{}", report.summary_line(&paths.output_file));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod index_storage;
pub mod indexer;
pub mod loader;
pub mod models;
pub mod normalizer;
pub mod tokens;
pub mod utils;

// Re-export commonly used types
pub use index_storage::{load_index, write_index};
pub use indexer::{BuildReport, build_index, generate_index};
pub use models::{Diagnostic, IndexDocument, IndexEntry, SourceRecord};
pub use normalizer::parse_loose_int;
pub use utils::IndexPaths;
