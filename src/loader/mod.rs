//! Record loading: discovery of project documents and JSON parsing
//!
//! # Error Handling Strategy
//!
//! Loading never fails as a whole:
//!
//! - **Missing source directory**: yields no records and no diagnostics, so a run against an
//!   unpopulated tree produces a valid, empty index.
//!
//! - **Per-file failures**: unreadable, oversized or malformed files are reported as
//!   [`Diagnostic`]s naming the file and are excluded from the run. Processing continues
//!   with the next file; nothing is retried.
//!
//! - **Ordering**: files are visited in file-name order so repeated runs over the same tree
//!   produce the same entry sequence.

pub mod discovery;
pub mod reader;

use std::path::Path;

pub use discovery::{RECORD_SUFFIX, discover_record_files};
pub use reader::read_record;

use crate::models::{Diagnostic, SourceRecord};

/// Records parsed from a source directory plus the findings for skipped files
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<SourceRecord>,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of candidate files that were skipped
    pub skipped: usize,
}

/// Discover and parse every project document in `dir`
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use project_search_index::loader::load_records;
///
/// let outcome = load_records(Path::new("data/projects"));
/// println!("{} records, {} skipped", outcome.records.len(), outcome.skipped);
/// ```
pub fn load_records(dir: &Path) -> LoadOutcome {
    let (files, mut diagnostics) = discover_record_files(dir);
    let mut records = Vec::with_capacity(files.len());
    let mut skipped = 0;

    for path in files {
        match read_record(&path) {
            Ok(record) => records.push(record),
            Err(kind) => {
                skipped += 1;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                diagnostics.push(Diagnostic::warning(file_name, kind));
            }
        }
    }

    LoadOutcome { records, diagnostics, skipped }
}
