//! Index persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{INDEX_FORMAT_VERSION, IndexDocument};

/// Sibling temp path used while writing `path`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the index document to `path`, creating missing parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, or the document cannot be
/// serialized, written or moved into place.
pub fn write_index(path: &Path, document: &IndexDocument) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let mut json =
        serde_json::to_string_pretty(document).context("Failed to serialize search index")?;
    json.push('\n');

    // Write atomically (temp file + rename)
    let temp = temp_path(path);
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp.display()))?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| format!("Failed to move index into place: {}", path.display()));
    }

    Ok(())
}

/// Load a previously written index
///
/// Returns `None` if the file doesn't exist or was written with a different format version.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a valid index document.
pub fn load_index(path: &Path) -> Result<Option<IndexDocument>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    let document: IndexDocument = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse index file: {}", path.display()))?;

    if document.version != INDEX_FORMAT_VERSION {
        eprintln!(
            "Index version mismatch (expected {}, found {}), regenerate the index",
            INDEX_FORMAT_VERSION, document.version
        );
        return Ok(None);
    }

    Ok(Some(document))
}
