use serde::{Deserialize, Serialize};

/// Canonical per-project index entry.
///
/// Unresolved strings are `""` and unresolved integers are `None` (serialized as `null`),
/// so every key is always present in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub key: String,
    pub slug: String,

    pub emirate: String,
    pub city: String,
    pub area: String,

    pub developer: String,
    pub property_types: Vec<String>,

    pub bedrooms_min: Option<i64>,
    pub bedrooms_max: Option<i64>,

    pub handover_year: Option<i64>,
    pub price_from_aed: Option<i64>,
    pub size_from_sqft: Option<i64>,

    pub tokens: Vec<String>,
}

impl IndexEntry {
    /// Whether `token` is one of this entry's search tokens
    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}
