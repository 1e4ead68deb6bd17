use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::error::{FixError, Result};
use crate::models::{CANONICAL_HEADER, TranscriptRow};

/// Serialize rows as canonical CSV: comma-delimited, minimal quoting, CRLF
/// record terminators, header always present even with no rows.
pub fn render_canonical(rows: &[TranscriptRow]) -> csv::Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CANONICAL_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

/// Overwrite `path` with the canonical rendering of `rows`.
///
/// The whole document is encoded before the file is truncated.
pub fn write_canonical(path: &Path, rows: &[TranscriptRow]) -> Result<()> {
    let bytes = render_canonical(rows).map_err(|source| FixError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, bytes).map_err(|source| FixError::Write {
        path: path.to_path_buf(),
        source,
    })
}
