use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{FixError, Result};
use crate::models::{Delimiter, HeaderRecord};

/// A transcript export parsed into header-driven records
#[derive(Debug, Clone)]
pub struct ParsedTranscript {
    /// Delimiter sniffed from the header line
    pub delimiter: Delimiter,
    /// Header names in column order
    pub headers: Vec<String>,
    /// Data rows in input order
    pub records: Vec<HeaderRecord>,
}

/// Read a transcript file as UTF-8 text
pub fn read_transcript_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// True when the content has nothing but whitespace
pub fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}

/// First line of the content once surrounding whitespace is stripped
pub fn header_line(content: &str) -> &str {
    content.trim().split('\n').next().unwrap_or("")
}

/// Pick the delimiter by counting candidates in the header line.
///
/// Semicolons must strictly outnumber commas; ties go to the comma.
pub fn detect_delimiter(header: &str) -> Delimiter {
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

/// Parse transcript content using the delimiter sniffed from its header
pub fn parse_transcript(content: &str) -> csv::Result<ParsedTranscript> {
    let delimiter = detect_delimiter(header_line(content));
    parse_with_delimiter(content, delimiter)
}

/// Parse transcript content with an explicit delimiter
pub fn parse_with_delimiter(
    content: &str,
    delimiter: Delimiter,
) -> csv::Result<ParsedTranscript> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true) // ragged rows are expected in hand-edited exports
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let cells: Vec<&str> = record.iter().collect();
        records.push(HeaderRecord::from_cells(headers.as_slice(), &cells, delimiter));
    }

    Ok(ParsedTranscript {
        delimiter,
        headers,
        records,
    })
}
