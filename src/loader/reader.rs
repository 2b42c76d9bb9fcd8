use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::models::{DiagnosticKind, SourceRecord};
use crate::utils::MAX_FILE_SIZE_BYTES;

/// Read and parse one project document
///
/// The size is checked on the open handle before reading so a file swapped in between
/// the check and the read cannot bypass the limit.
///
/// On failure the reason is returned as a [`DiagnosticKind`]; the caller tags it with the
/// file name and skips the file.
pub fn read_record(path: &Path) -> Result<SourceRecord, DiagnosticKind> {
    let file = File::open(path).map_err(|e| DiagnosticKind::Unreadable { reason: e.to_string() })?;

    let size = file
        .metadata()
        .map_err(|e| DiagnosticKind::Unreadable { reason: e.to_string() })?
        .len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(DiagnosticKind::Oversized { size, limit: MAX_FILE_SIZE_BYTES });
    }

    let mut bytes = Vec::with_capacity(size as usize);
    file.take(MAX_FILE_SIZE_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| DiagnosticKind::Unreadable { reason: e.to_string() })?;

    // Invalid UTF-8 sequences become U+FFFD rather than rejecting the document
    let raw = String::from_utf8_lossy(&bytes);

    let value = serde_json::from_str::<Value>(&raw)
        .map_err(|e| DiagnosticKind::ParseError { reason: e.to_string() })?;

    Ok(SourceRecord::new(path, value))
}
