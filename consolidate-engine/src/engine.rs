//! Consolidation engine.
//!
//! Pipeline per run:
//! - read every input fully (all-or-nothing)
//! - validate that all headers are present and identical
//! - drop rows with a blank required column
//! - collapse space runs in every value
//! - merge file by file through `OrderedMultiSet` (dedup across files only)
//! - sort by a date-aware key if the sort column exists
//! - serialize header + rows as CSV

use consolidate_core::{Header, OrderedMultiSet, Row, is_blank, normalize_row, parse_sort_key};
use consolidate_ingest::{Document, read_document};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::ConsolidateError;
use crate::options::ConsolidateOptions;
use crate::writer::serialize;

/// Read `paths` in order and consolidate them into CSV text.
pub fn consolidate<P: AsRef<Path>>(
    paths: &[P],
    options: &ConsolidateOptions,
) -> Result<String, ConsolidateError> {
    if paths.is_empty() {
        return Err(ConsolidateError::NoInputs);
    }

    let docs = paths
        .iter()
        .map(read_document)
        .collect::<Result<Vec<_>, _>>()?;

    consolidate_documents(docs, options)
}

/// Consolidate documents that are already in memory, in the given order.
pub fn consolidate_documents(
    docs: Vec<Document>,
    options: &ConsolidateOptions,
) -> Result<String, ConsolidateError> {
    let header = validate_headers(&docs)?.clone();

    let require_idx = options.require.as_deref().and_then(|name| {
        let idx = header.position(name);
        if idx.is_none() {
            warn!(column = name, "required column not in header; keeping all rows");
        }
        idx
    });
    let sort_idx = options.sort_key.as_deref().and_then(|name| {
        let idx = header.position(name);
        if idx.is_none() {
            debug!(column = name, "sort column not in header; keeping arrival order");
        }
        idx
    });

    let max_extra = docs.iter().map(|d| d.max_extra).max().unwrap_or(0);
    let mut merged = OrderedMultiSet::new();

    for doc in docs {
        let total = doc.rows.len();
        let batch: Vec<Row> = doc
            .rows
            .into_iter()
            .filter(|row| has_required(row, require_idx))
            .map(normalize_row)
            .collect();
        let dropped = total - batch.len();
        let candidates = batch.len();
        let kept = merged.extend(batch);

        debug!(
            path = %doc.path.display(),
            rows = total,
            dropped,
            duplicates = candidates - kept,
            "merged document"
        );
    }

    if let Some(idx) = sort_idx {
        merged.sort_by_key(|row| parse_sort_key(row.get(idx).unwrap_or_default()));
    }

    info!(
        rows = merged.len(),
        columns = header.len(),
        max_extra,
        sorted = sort_idx.is_some(),
        "consolidated"
    );

    serialize(&header, &merged)
}

/// The shared header, or the first reason the inputs cannot be merged.
pub fn validate_headers(docs: &[Document]) -> Result<&Header, ConsolidateError> {
    let first = docs.first().ok_or(ConsolidateError::NoInputs)?;

    if let Some(doc) = docs.iter().find(|d| d.header.is_empty()) {
        return Err(ConsolidateError::HeaderMissing {
            path: doc.path.clone(),
        });
    }

    if let Some(doc) = docs.iter().find(|d| d.header != first.header) {
        return Err(ConsolidateError::HeaderMismatch {
            path: doc.path.clone(),
            expected: first.header.clone(),
            found: doc.header.clone(),
        });
    }

    Ok(&first.header)
}

fn has_required(row: &Row, require_idx: Option<usize>) -> bool {
    match require_idx {
        Some(idx) => !is_blank(row.get(idx).unwrap_or_default()),
        None => true,
    }
}
