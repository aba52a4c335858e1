//! consolidate-ingest: loading CSV exports into documents, and input ordering helpers.

pub mod error;
pub mod filename;
pub mod reader;
pub mod types;

pub use error::IngestError;
pub use filename::{embedded_date, order_by_filename_date};
pub use reader::{parse_document, read_document};
pub use types::Document;
