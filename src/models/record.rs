use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Field holding the record identifier
pub const FIELD_PROJECT_KEY: &str = "project_key";
/// Field holding the URL-safe handle
pub const FIELD_SLUG: &str = "slug";
/// Nested block with search-relevant attributes
pub const FIELD_SEARCH: &str = "_search";

/// A parsed project document together with the file it came from.
///
/// No schema is enforced: any parseable JSON is accepted, and a root that is not an
/// object simply behaves as a record without fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub path: PathBuf,
    pub value: Value,
}

impl SourceRecord {
    pub fn new(path: impl Into<PathBuf>, value: Value) -> Self {
        Self { path: path.into(), value }
    }

    /// Source file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used to tag diagnostics (falls back to the full path)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// File name without its extension, used as the slug fallback
    pub fn file_stem(&self) -> String {
        self.path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
    }

    /// Top-level field, if the root is an object and the field is present
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.value.as_object().and_then(|obj| obj.get(name))
    }

    pub fn project_key(&self) -> Option<&Value> {
        self.field(FIELD_PROJECT_KEY)
    }

    pub fn slug(&self) -> Option<&Value> {
        self.field(FIELD_SLUG)
    }

    /// The `_search` metadata block; anything other than an object counts as absent
    pub fn search_block(&self) -> Option<&Map<String, Value>> {
        self.field(FIELD_SEARCH).and_then(Value::as_object)
    }

    /// Attribute from the metadata block
    pub fn search_field(&self, name: &str) -> Option<&Value> {
        self.search_block().and_then(|block| block.get(name))
    }
}
