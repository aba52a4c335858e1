//! CSV file reader.
//!
//! The first line is the header. Rows keep any values that trail past the
//! header width as extras instead of failing the record, so the reader runs
//! in flexible mode with no implicit header handling.

use consolidate_core::{Header, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::IngestError;
use crate::types::Document;

const BOM: char = '\u{feff}';

/// Read a whole CSV file into memory and parse it.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document, IngestError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = parse_document(path, &text)?;
    debug!(
        path = %path.display(),
        columns = doc.header.len(),
        rows = doc.rows.len(),
        max_extra = doc.max_extra,
        "read document"
    );
    Ok(doc)
}

/// Parse CSV text already in memory. `path` is only used for reporting.
pub fn parse_document(path: impl Into<PathBuf>, text: &str) -> Result<Document, IngestError> {
    let path = path.into();
    let text = text.strip_prefix(BOM).unwrap_or(text);

    // A blank first line means there is no header, even if data follows.
    let first_line = text.lines().next().unwrap_or("");
    if first_line.trim_end_matches('\r').is_empty() {
        return Ok(Document::empty(path));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = rdr.records();

    let header = match records.next() {
        Some(result) => {
            let record = result.map_err(|source| IngestError::Csv {
                path: path.clone(),
                source,
            })?;
            Header::new(record.iter())
        }
        None => Header::default(),
    };
    let width = header.len();

    let mut rows = Vec::new();
    let mut max_extra = 0;
    for result in records {
        let record = result.map_err(|source| IngestError::Csv {
            path: path.clone(),
            source,
        })?;
        let row = Row::from_record(record.iter(), width);
        max_extra = max_extra.max(row.extras.len());
        rows.push(row);
    }

    Ok(Document {
        path,
        header,
        rows,
        max_extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_document() {
        let doc = parse_document("a.csv", "date,desc,amount\n2024-01-01,Coffee,4.5\n").unwrap();
        assert_eq!(doc.header, Header::new(["date", "desc", "amount"]));
        assert_eq!(doc.rows, vec![Row::from_record(["2024-01-01", "Coffee", "4.5"], 3)]);
        assert_eq!(doc.max_extra, 0);
    }

    #[test]
    fn test_quoted_fields_are_unescaped() {
        let doc = parse_document("a.csv", "date,desc\n01/02/2026,\"Bagel, \"\"plain\"\"\"\n").unwrap();
        assert_eq!(doc.rows[0].get(1), Some("Bagel, \"plain\""));
    }

    #[test]
    fn test_trailing_values_become_extras() {
        let text = "Details,Posting Date,Description,Amount,Type,Balance,Check or Slip #\n\
                    DEBIT,02/06/2026,VENMO,-20.00,ACH_DEBIT,100.00,,,\n\
                    CREDIT,02/05/2026,PAYROLL,500.00,ACH_CREDIT,120.00,\n";
        let doc = parse_document("chase.csv", text).unwrap();
        assert_eq!(doc.header.len(), 7);
        assert_eq!(doc.rows[0].extras, vec!["", ""]);
        assert!(doc.rows[1].extras.is_empty());
        assert_eq!(doc.max_extra, 2);
    }

    #[test]
    fn test_empty_text_has_no_header() {
        let doc = parse_document("empty.csv", "").unwrap();
        assert!(doc.header.is_empty());
        assert!(doc.rows.is_empty());
    }

    #[test]
    fn test_blank_first_line_has_no_header() {
        let doc = parse_document("blank.csv", "\ndate,desc\n2024-01-01,x\n").unwrap();
        assert!(doc.header.is_empty());
    }

    #[test]
    fn test_header_only_document() {
        let doc = parse_document("h.csv", "Date,desc,amount\r\n").unwrap();
        assert_eq!(doc.header, Header::new(["Date", "desc", "amount"]));
        assert!(doc.rows.is_empty());
    }

    #[test]
    fn test_bom_is_stripped_from_header() {
        let doc = parse_document("bom.csv", "\u{feff}Date,Amount\n01/01/2026,1.00\n").unwrap();
        assert_eq!(doc.header.names()[0], "Date");
    }

    #[test]
    fn test_read_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "date,desc,amount\n2024-01-02,Bagel,3.0\n").unwrap();
        let doc = read_document(file.path()).unwrap();
        assert_eq!(doc.path, file.path());
        assert_eq!(doc.rows.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
