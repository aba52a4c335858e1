use serde::{Deserialize, Serialize};

/// Column used to order output rows when none is given.
pub const DEFAULT_SORT_KEY: &str = "date";

/// Knobs for one consolidation run. Column names match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidateOptions {
    /// Sort rows by this column; no sort if `None` or not in the header.
    pub sort_key: Option<String>,
    /// Drop rows whose value in this column is blank.
    pub require: Option<String>,
}

impl Default for ConsolidateOptions {
    fn default() -> Self {
        Self {
            sort_key: Some(DEFAULT_SORT_KEY.to_string()),
            require: None,
        }
    }
}

impl ConsolidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort_key(mut self, column: impl Into<String>) -> Self {
        self.sort_key = Some(column.into());
        self
    }

    pub fn without_sort(mut self) -> Self {
        self.sort_key = None;
        self
    }

    pub fn with_require(mut self, column: impl Into<String>) -> Self {
        self.require = Some(column.into());
        self
    }
}
