use consolidate_core::Header;
use consolidate_ingest::IngestError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsolidateError {
    #[error("no input files given")]
    NoInputs,

    #[error("no headers found in {}", path.display())]
    HeaderMissing { path: PathBuf },

    #[error(
        "header mismatch in {}: expected {:?}, found {:?}",
        path.display(),
        expected.names(),
        found.names()
    )]
    HeaderMismatch {
        path: PathBuf,
        expected: Header,
        found: Header,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("writing CSV output: {0}")]
    Write(#[from] csv::Error),
}
