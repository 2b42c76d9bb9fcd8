use std::collections::HashMap;

use crate::models::{Diagnostic, DiagnosticKind, IndexDocument, IndexEntry};

/// Wrap entries, in discovery order, into a versioned document stamped with the current time
pub fn assemble_document(entries: Vec<IndexEntry>) -> IndexDocument {
    IndexDocument::new(entries)
}

/// Report repeated keys and slugs without removing anything.
///
/// `files[i]` is the source file name of `entries[i]`. Each repeat yields one warning that
/// names the file which used the value first.
pub fn detect_collisions(entries: &[IndexEntry], files: &[String]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut keys: HashMap<&str, &str> = HashMap::new();
    let mut slugs: HashMap<&str, &str> = HashMap::new();

    for (entry, file) in entries.iter().zip(files) {
        if let Some(first_file) = keys.get(entry.key.as_str()) {
            diagnostics.push(Diagnostic::warning(
                file.as_str(),
                DiagnosticKind::DuplicateKey {
                    key: entry.key.clone(),
                    first_file: first_file.to_string(),
                },
            ));
        } else {
            keys.insert(&entry.key, file);
        }

        if let Some(first_file) = slugs.get(entry.slug.as_str()) {
            diagnostics.push(Diagnostic::warning(
                file.as_str(),
                DiagnosticKind::DuplicateSlug {
                    slug: entry.slug.clone(),
                    first_file: first_file.to_string(),
                },
            ));
        } else {
            slugs.insert(&entry.slug, file);
        }
    }

    diagnostics
}
