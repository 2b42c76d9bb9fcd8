use crate::models::{Diagnostic, IndexEntry, MissingField, SourceRecord};
use crate::normalizer::coerce::{parse_loose_int, to_lower_list, to_lower_trimmed, to_trimmed};

const SEARCH_EMIRATE: &str = "emirate";
const SEARCH_CITY: &str = "city";
const SEARCH_AREA: &str = "area";
const SEARCH_DEVELOPER: &str = "developer";
const SEARCH_PROPERTY_TYPES: &str = "property_types";
const SEARCH_BEDROOMS_MIN: &str = "bedrooms_min";
const SEARCH_BEDROOMS_MAX: &str = "bedrooms_max";
const SEARCH_HANDOVER_YEAR: &str = "handover_year";
const SEARCH_PRICE_FROM_AED: &str = "price_from_aed";
const SEARCH_SIZE_FROM_SQFT: &str = "size_from_sqft";

/// Normalized entry (tokens not yet derived) and its missing-field report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub entry: IndexEntry,
    pub diagnostic: Option<Diagnostic>,
}

/// Map one source record onto the canonical attribute set
///
/// Resolution order:
/// - `slug`: explicit non-blank `slug`, else the file name without extension
/// - `key`: explicit non-blank `project_key`, else the resolved slug
/// - string attributes: trimmed and lowercased from `_search`, `""` when absent
/// - `property_types`: trimmed, lowercased, empties dropped; non-arrays give `[]`
/// - integer attributes: [`parse_loose_int`], `None` when absent or unparseable
///
/// Never fails. `size_from_sqft` is routinely unknown and is not reported when missing.
pub fn normalize_record(record: &SourceRecord) -> Normalized {
    let mut missing = Vec::new();

    let explicit_slug = to_trimmed(record.slug());
    let slug = if explicit_slug.is_empty() {
        missing.push(MissingField::SlugFallback);
        record.file_stem()
    } else {
        explicit_slug
    };

    let explicit_key = to_trimmed(record.project_key());
    let key = if explicit_key.is_empty() {
        missing.push(MissingField::ProjectKeyFallback);
        slug.clone()
    } else {
        explicit_key
    };

    let mut text = |name: &str, field: MissingField| {
        let value = to_lower_trimmed(record.search_field(name));
        if value.is_empty() {
            missing.push(field);
        }
        value
    };
    let emirate = text(SEARCH_EMIRATE, MissingField::Emirate);
    let city = text(SEARCH_CITY, MissingField::City);
    let area = text(SEARCH_AREA, MissingField::Area);
    let developer = text(SEARCH_DEVELOPER, MissingField::Developer);

    let property_types = to_lower_list(record.search_field(SEARCH_PROPERTY_TYPES));
    if property_types.is_empty() {
        missing.push(MissingField::PropertyTypes);
    }

    let mut integer = |name: &str, field: MissingField| {
        let value = parse_loose_int(record.search_field(name));
        if value.is_none() {
            missing.push(field);
        }
        value
    };
    let bedrooms_min = integer(SEARCH_BEDROOMS_MIN, MissingField::BedroomsMin);
    let bedrooms_max = integer(SEARCH_BEDROOMS_MAX, MissingField::BedroomsMax);
    let handover_year = integer(SEARCH_HANDOVER_YEAR, MissingField::HandoverYear);
    let price_from_aed = integer(SEARCH_PRICE_FROM_AED, MissingField::PriceFromAed);

    let size_from_sqft = parse_loose_int(record.search_field(SEARCH_SIZE_FROM_SQFT));

    let entry = IndexEntry {
        key,
        slug,
        emirate,
        city,
        area,
        developer,
        property_types,
        bedrooms_min,
        bedrooms_max,
        handover_year,
        price_from_aed,
        size_from_sqft,
        tokens: Vec::new(),
    };

    Normalized { entry, diagnostic: Diagnostic::missing_fields(record.file_name(), missing) }
}
