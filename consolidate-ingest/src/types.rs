use consolidate_core::{Header, Row};
use std::path::PathBuf;

/// One parsed input file, fully materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    /// Empty when the file had no header line.
    pub header: Header,
    pub rows: Vec<Row>,
    /// Largest number of trailing values seen past the header on any row.
    pub max_extra: usize,
}

impl Document {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            header: Header::default(),
            rows: Vec::new(),
            max_extra: 0,
        }
    }
}
