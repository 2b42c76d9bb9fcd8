//! Index builder for project documents.
//!
//! Runs the pipeline in one direction: load → normalize → derive tokens → assemble.
//! Each record is processed independently of the others, so normalization runs on the
//! rayon pool and the results are collected back in discovery order. The assembled
//! document is the only accumulation point and is written once, at the end.

use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

use crate::index_storage::write_index;
use crate::indexer::assembler::{assemble_document, detect_collisions};
use crate::loader::load_records;
use crate::models::{Diagnostic, DiagnosticKind, IndexDocument, IndexEntry, SourceRecord};
use crate::normalizer::normalize_record;
use crate::tokens::{bedroom_span_too_wide, derive_tokens};
use crate::utils::IndexPaths;

/// Result of one pipeline run
#[derive(Debug)]
pub struct BuildReport {
    pub document: IndexDocument,
    /// Load findings, then per-record findings in discovery order, then collision warnings
    pub diagnostics: Vec<Diagnostic>,
    /// Candidate files excluded from the index
    pub files_skipped: usize,
}

impl BuildReport {
    pub fn indexed(&self) -> usize {
        self.document.len()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// One-line summary, e.g. `Generated 12 projects -> data/search/search_index.json`
    pub fn summary_line(&self, output: &Path) -> String {
        format!("Generated {} projects -> {}", self.indexed(), output.display())
    }
}

/// Normalize one record and derive its tokens
///
/// Pure function of the record; the returned diagnostics belong to this record only.
pub fn build_entry(record: &SourceRecord) -> (IndexEntry, Vec<Diagnostic>) {
    let normalized = normalize_record(record);
    let mut entry = normalized.entry;
    let mut diagnostics: Vec<Diagnostic> = normalized.diagnostic.into_iter().collect();

    if let (Some(min), Some(max)) = (entry.bedrooms_min, entry.bedrooms_max)
        && bedroom_span_too_wide(min, max)
    {
        diagnostics.push(Diagnostic::warning(
            record.file_name(),
            DiagnosticKind::BedroomSpanTooWide { min, max },
        ));
    }

    entry.tokens = derive_tokens(record, &entry);
    (entry, diagnostics)
}

/// Build the index document from every project document in `projects_dir`
///
/// A missing directory, or one without valid documents, yields an empty document.
/// Malformed files are skipped and reported; this function itself cannot fail.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use project_search_index::build_index;
///
/// let report = build_index(Path::new("data/projects"));
/// println!("Indexed {} projects ({} skipped)", report.indexed(), report.files_skipped);
/// ```
pub fn build_index(projects_dir: &Path) -> BuildReport {
    let loaded = load_records(projects_dir);
    let mut diagnostics = loaded.diagnostics;

    let built: Vec<(IndexEntry, Vec<Diagnostic>)> =
        loaded.records.par_iter().map(build_entry).collect();

    let files: Vec<String> = loaded.records.iter().map(SourceRecord::file_name).collect();
    let mut entries = Vec::with_capacity(built.len());
    for (entry, record_diagnostics) in built {
        diagnostics.extend(record_diagnostics);
        entries.push(entry);
    }

    diagnostics.extend(detect_collisions(&entries, &files));

    BuildReport {
        document: assemble_document(entries),
        diagnostics,
        files_skipped: loaded.skipped,
    }
}

/// Build the index and persist it at `paths.output_file`, replacing any previous index
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the file cannot be
/// written. Nothing is left at the output path in that case beyond what was there before.
pub fn generate_index(paths: &IndexPaths) -> Result<BuildReport> {
    let report = build_index(&paths.projects_dir);
    write_index(&paths.output_file, &report.document)?;
    Ok(report)
}
