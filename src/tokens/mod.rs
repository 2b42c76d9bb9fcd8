//! Search token derivation
//!
//! Tokens are lowercase strings a downstream search feature matches by set membership or
//! substring. They are de-duplicated and kept in order of first occurrence.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::{IndexEntry, SourceRecord};
use crate::normalizer::to_lower_trimmed;

/// Token present on every entry, marking the dataset's scope
pub const GLOBAL_SCOPE_TOKEN: &str = "uae";

/// Largest bedroom range expanded into `{n}br` tokens
pub const MAX_BEDROOM_SPAN: i64 = 64;

/// Insertion-ordered set of non-empty tokens
#[derive(Debug, Default)]
struct TokenSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl TokenSet {
    fn insert(&mut self, token: String) {
        if token.is_empty() || self.seen.contains(&token) {
            return;
        }
        self.seen.insert(token.clone());
        self.ordered.push(token);
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Compute the token set for one record
///
/// Sources, in order:
/// 1. raw `project_key` and `slug` (not their fallbacks), lowercased, when truthy
/// 2. normalized `developer`, `emirate`, `area` when non-empty
/// 3. every normalized property type
/// 4. one `{n}br` token per bedroom count in `bedrooms_min..=bedrooms_max`
/// 5. [`GLOBAL_SCOPE_TOKEN`]
///
/// An inverted bedroom range expands to nothing, as does one wider than
/// [`MAX_BEDROOM_SPAN`] (see [`bedroom_span_too_wide`]).
pub fn derive_tokens(record: &SourceRecord, entry: &IndexEntry) -> Vec<String> {
    let mut tokens = TokenSet::default();

    for raw in [record.project_key(), record.slug()] {
        if raw.is_some_and(is_truthy) {
            tokens.insert(to_lower_trimmed(raw));
        }
    }

    for attribute in [&entry.developer, &entry.emirate, &entry.area] {
        tokens.insert(attribute.to_lowercase());
    }

    for property_type in &entry.property_types {
        tokens.insert(property_type.clone());
    }

    for token in bedroom_tokens(entry.bedrooms_min, entry.bedrooms_max) {
        tokens.insert(token);
    }

    tokens.insert(GLOBAL_SCOPE_TOKEN.to_string());

    tokens.into_vec()
}

/// `false`, `0`, `""` and `null` count as unset identifiers
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `{n}br` tokens for an inclusive range; empty when either bound is missing
pub fn bedroom_tokens(min: Option<i64>, max: Option<i64>) -> Vec<String> {
    let (Some(min), Some(max)) = (min, max) else {
        return Vec::new();
    };
    if min > max || bedroom_span_too_wide(min, max) {
        return Vec::new();
    }
    (min..=max).map(|b| format!("{}br", b)).collect()
}

/// Whether `min..=max` is a valid range too wide to expand
pub fn bedroom_span_too_wide(min: i64, max: i64) -> bool {
    min <= max && max.saturating_sub(min) >= MAX_BEDROOM_SPAN
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::normalizer::normalize_record;

    fn tokens_for(value: serde_json::Value) -> Vec<String> {
        let record = SourceRecord::new("/data/projects/sample.json", value);
        let entry = normalize_record(&record).entry;
        derive_tokens(&record, &entry)
    }

    fn br_tokens(tokens: &[String]) -> Vec<&str> {
        tokens.iter().filter(|t| t.ends_with("br")).map(String::as_str).collect()
    }

    #[test]
    fn test_full_token_order() {
        let tokens = tokens_for(json!({
            "project_key": "EMAAR-MV",
            "slug": "Marina-Vista",
            "_search": {
                "emirate": "Dubai",
                "city": "Dubai",
                "area": "Dubai Marina",
                "developer": "Emaar",
                "property_types": ["Apartment", "Villa"],
                "bedrooms_min": 1,
                "bedrooms_max": 2
            }
        }));

        assert_eq!(
            tokens,
            vec![
                "emaar-mv",
                "marina-vista",
                "emaar",
                "dubai",
                "dubai marina",
                "apartment",
                "villa",
                "1br",
                "2br",
                "uae"
            ]
        );
    }

    #[test]
    fn test_city_is_not_a_token() {
        let tokens = tokens_for(json!({"_search": {"city": "Abu Dhabi"}}));
        assert!(!tokens.contains(&"abu dhabi".to_string()));
    }

    #[test]
    fn test_bedroom_range_expansion() {
        let tokens = tokens_for(json!({"_search": {"bedrooms_min": 1, "bedrooms_max": 3}}));
        assert_eq!(br_tokens(&tokens), vec!["1br", "2br", "3br"]);
    }

    #[test]
    fn test_inverted_bedroom_range() {
        let tokens = tokens_for(json!({"_search": {"bedrooms_min": 3, "bedrooms_max": 1}}));
        assert!(br_tokens(&tokens).is_empty());
    }

    #[test]
    fn test_single_bound_has_no_bedroom_tokens() {
        let tokens = tokens_for(json!({"_search": {"bedrooms_min": 2}}));
        assert!(br_tokens(&tokens).is_empty());
    }

    #[test]
    fn test_studio_range_from_zero() {
        let tokens = tokens_for(json!({"_search": {"bedrooms_min": "0", "bedrooms_max": "1"}}));
        assert_eq!(br_tokens(&tokens), vec!["0br", "1br"]);
    }

    #[test]
    fn test_wide_bedroom_range_is_not_expanded() {
        assert!(bedroom_span_too_wide(0, MAX_BEDROOM_SPAN));
        assert!(!bedroom_span_too_wide(0, MAX_BEDROOM_SPAN - 1));
        assert!(!bedroom_span_too_wide(5, 1));
        assert_eq!(bedroom_tokens(Some(0), Some(MAX_BEDROOM_SPAN - 1)).len(), MAX_BEDROOM_SPAN as usize);
        assert!(bedroom_tokens(Some(0), Some(1_000_000)).is_empty());
        assert!(bedroom_tokens(Some(i64::MIN), Some(i64::MAX)).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let tokens = tokens_for(json!({
            "project_key": "dubai",
            "slug": "DUBAI",
            "_search": {"emirate": "Dubai", "area": "dubai", "property_types": ["dubai"]}
        }));
        assert_eq!(tokens, vec!["dubai", "uae"]);
    }

    #[test]
    fn test_bare_record_tokens() {
        let tokens = tokens_for(json!({}));
        assert_eq!(tokens, vec![GLOBAL_SCOPE_TOKEN]);
    }

    #[test]
    fn test_fallback_slug_is_not_a_token() {
        let tokens = tokens_for(json!({"project_key": "P-7"}));
        assert_eq!(tokens, vec!["p-7", "uae"]);
    }

    #[test]
    fn test_falsy_identifiers_give_no_token() {
        let tokens = tokens_for(json!({"project_key": 0, "slug": false}));
        assert_eq!(tokens, vec!["uae"]);

        let tokens = tokens_for(json!({"project_key": 0.0, "slug": "false"}));
        assert_eq!(tokens, vec!["false", "uae"]);
    }

    #[test]
    fn test_whole_float_bedroom_range() {
        let tokens = tokens_for(json!({"_search": {"bedrooms_min": 2.0, "bedrooms_max": 3.0}}));
        assert_eq!(br_tokens(&tokens), vec!["2br", "3br"]);
    }

    #[test]
    fn test_numeric_identifier_token() {
        let tokens = tokens_for(json!({"project_key": 1042}));
        assert_eq!(tokens, vec!["1042", "uae"]);
    }
}
