//! CSV serialization of the consolidated output.

use consolidate_core::{Header, Row};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ConsolidateError;

/// Header line then one line per row, `\n`-joined, trailing whitespace trimmed.
///
/// Records may be wider than the header (ragged extras), so the writer is flexible.
pub fn serialize<'a, I>(header: &Header, rows: I) -> Result<String, ConsolidateError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.serialize(header)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ConsolidateError::Write(csv::Error::from(e.into_error())))?;
    // Every field came from valid UTF-8 strings.
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_end().to_string())
}
