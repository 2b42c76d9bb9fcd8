//! Field normalization: raw project documents to canonical index attributes
//!
//! Normalization is total. Every attribute resolves to a defined empty value (`""` for
//! strings, `None` for integers) instead of dropping the record, and the gaps are reported
//! as one consolidated [`Diagnostic`](crate::models::Diagnostic) per record.

pub mod coerce;
pub mod fields;

pub use coerce::{parse_loose_int, stringify, to_lower_list, to_lower_trimmed, to_trimmed};
pub use fields::{Normalized, normalize_record};
