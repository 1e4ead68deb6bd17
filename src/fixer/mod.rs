pub mod columns;

pub use columns::*;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{FixError, Result};
use crate::io::{is_blank, parse_transcript, read_transcript_file, write_canonical};
use crate::models::{Delimiter, TranscriptRow};

/// Result of fixing one transcript file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// The file was rewritten in canonical form
    Fixed {
        /// Rows written after the header
        rows: usize,
        /// Input rows dropped because every field resolved empty
        dropped: usize,
        /// Delimiter the input was parsed with
        delimiter: Delimiter,
    },
    /// The file held only whitespace and was left untouched
    Empty,
}

/// In-memory result of remapping a transcript export
#[derive(Debug, Clone)]
pub struct Transformation {
    pub delimiter: Delimiter,
    /// Header names of the input, in column order
    pub headers: Vec<String>,
    /// Canonical rows, in input order
    pub rows: Vec<TranscriptRow>,
    /// Number of input rows dropped as blank
    pub dropped: usize,
    /// First column that supplied each field anywhere in the file
    pub sources: ColumnSources,
}

impl Transformation {
    /// Number of data rows in the input
    pub fn input_rows(&self) -> usize {
        self.rows.len() + self.dropped
    }
}

/// Remap transcript content into canonical rows without touching disk
pub fn transform(content: &str) -> csv::Result<Transformation> {
    let parsed = parse_transcript(content)?;

    let mut rows = Vec::with_capacity(parsed.records.len());
    let mut dropped = 0;
    let mut sources = ColumnSources::default();

    for mut record in parsed.records {
        record.remove_blank_sentinel();

        let (row, row_sources) = resolve_row(&record);
        if row.is_blank() {
            dropped += 1;
            continue;
        }
        sources.merge(row_sources);
        rows.push(row);
    }

    Ok(Transformation {
        delimiter: parsed.delimiter,
        headers: parsed.headers,
        rows,
        dropped,
        sources,
    })
}

/// Read a transcript file and remap it, without writing anything.
///
/// Returns `None` for a whitespace-only file.
pub fn inspect_file(path: &Path) -> Result<Option<Transformation>> {
    let content = read_transcript_file(path)?;
    if is_blank(&content) {
        return Ok(None);
    }

    transform(&content).map(Some).map_err(|source| FixError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrite one transcript file in place using the canonical schema
pub fn fix_file(path: &Path) -> Result<FixOutcome> {
    let name = display_name(path);
    info!("Processing {}...", name);

    let Some(transformation) = inspect_file(path)? else {
        warn!("{} is empty, leaving it untouched", name);
        return Ok(FixOutcome::Empty);
    };

    debug!(
        "{}: delimiter {}, headers {:?}, {} blank rows dropped",
        name, transformation.delimiter, transformation.headers, transformation.dropped
    );

    write_canonical(path, &transformation.rows)?;

    let rows = transformation.rows.len();
    info!("Fixed {} ({} rows)", name, rows);

    Ok(FixOutcome::Fixed {
        rows,
        dropped: transformation.dropped,
        delimiter: transformation.delimiter,
    })
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
