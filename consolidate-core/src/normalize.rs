//! Field normalization for bank-export formatting artifacts.
//!
//! Exports pad fixed-width descriptions with long space runs, e.g.
//! `ORIG CO NAME:VENMO            CO ENTRY DESCR:CASHOUT`. Only runs of two or
//! more plain spaces are touched; tabs and lone spaces are kept.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::row::Row;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid regex"));

pub fn collapse_spaces(value: &str) -> Cow<'_, str> {
    SPACE_RUN.replace_all(value, " ")
}

/// Collapse space runs in every value of the row, extras included.
pub fn normalize_row(row: Row) -> Row {
    row.map_values(|v| {
        let collapsed = match collapse_spaces(&v) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        collapsed.unwrap_or(v)
    })
}

/// Empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
