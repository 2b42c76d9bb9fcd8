use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::models::{Diagnostic, DiagnosticKind};

/// Suffix a file must carry to be treated as a project document
pub const RECORD_SUFFIX: &str = ".json";

/// Find project documents directly inside `dir`
///
/// Only regular files whose name ends in [`RECORD_SUFFIX`] are returned; sub-directories,
/// other files and symlinks are ignored. Results are sorted by file name.
///
/// Returns an empty list if `dir` doesn't exist (not an error). If `dir` exists but can't be
/// listed, a warning diagnostic is returned alongside whatever entries could be read.
pub fn discover_record_files(dir: &Path) -> (Vec<PathBuf>, Vec<Diagnostic>) {
    let mut files = Vec::new();
    let mut diagnostics = Vec::new();

    if !dir.exists() {
        return (files, diagnostics);
    }

    if !dir.is_dir() {
        diagnostics.push(Diagnostic::warning(
            dir.display().to_string(),
            DiagnosticKind::SourceDirUnreadable { reason: "not a directory".to_string() },
        ));
        return (files, diagnostics);
    }

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                diagnostics.push(Diagnostic::warning(
                    dir.display().to_string(),
                    DiagnosticKind::SourceDirUnreadable { reason: e.to_string() },
                ));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let is_record = entry.file_name().to_string_lossy().ends_with(RECORD_SUFFIX);
        if is_record {
            files.push(entry.into_path());
        }
    }

    (files, diagnostics)
}
