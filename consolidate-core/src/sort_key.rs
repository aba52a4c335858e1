//! Date-aware sort keys.
//!
//! Formats are tried in order and the first match wins. Values that match no
//! format fall back to the raw string so mixed columns still sort.

use chrono::NaiveDate;

/// Accepted date layouts, most common bank-export layout first.
pub const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Parsed sort key for one cell.
///
/// Variant order is part of the contract: every `Date` sorts before every
/// `Raw`. Dates compare chronologically, raws compare lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Date(NaiveDate),
    Raw(String),
}

pub fn parse_sort_key(value: &str) -> SortKey {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .map(SortKey::Date)
        .unwrap_or_else(|| SortKey::Raw(value.to_string()))
}
