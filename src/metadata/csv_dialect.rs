//! The Excel-style CSV dialect shared by templates and metadata sheets.
//!
//! Comma delimited, `"` quoting with doubled quotes inside quoted fields,
//! quoting only where a field needs it, CRLF record terminators.

use std::io::{self, Read, Write};

use super::MetadataError;

/// Build a CSV writer using the sheet dialect.
pub(crate) fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

/// Build a CSV reader using the sheet dialect.
///
/// The header row is returned as an ordinary record so callers decide what
/// to do with it. Rows may have any number of fields.
pub(crate) fn reader<R: Read>(inner: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .double_quote(true)
        .has_headers(false)
        .flexible(true)
        .from_reader(inner)
}

/// Flush an in-memory CSV writer and return its text.
pub(crate) fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, MetadataError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| MetadataError::IoError(io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| MetadataError::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Reject text whose last quoted field is never closed.
///
/// The `csv` reader silently runs an open quote to end of input. Reported
/// with the line the quote opened on.
pub(crate) fn check_balanced_quotes(text: &str) -> Result<(), MetadataError> {
    let mut state = QuoteState::FieldStart;
    let mut line: u64 = 1;
    let mut opened_at: u64 = 1;

    for b in text.bytes() {
        state = match (state, b) {
            (QuoteState::FieldStart, b'"') => {
                opened_at = line;
                QuoteState::Quoted
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, b',' | b'\r' | b'\n') => {
                QuoteState::FieldStart
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b',' | b'\r' | b'\n') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, _) => QuoteState::Unquoted,
        };

        if b == b'\n' {
            line += 1;
        }
    }

    if let QuoteState::Quoted = state {
        return Err(MetadataError::parse(
            opened_at,
            "quoted field is never closed",
        ));
    }

    Ok(())
}
