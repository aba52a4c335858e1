//! consolidate-engine: merge CSV exports that share a header into one deduplicated CSV.

pub mod engine;
pub mod error;
pub mod options;
pub mod writer;

pub use engine::{consolidate, consolidate_documents, validate_headers};
pub use error::ConsolidateError;
pub use options::{ConsolidateOptions, DEFAULT_SORT_KEY};
pub use writer::serialize;
