use crate::models::{HeaderRecord, TranscriptRow};

/// Header names probed for the `timestamp` field, highest priority first.
/// `End Timestamp` is never a candidate.
pub const TIMESTAMP_COLUMNS: &[&str] = &[
    "timestamp",
    "Timestamp",
    "Start Timestamp",
    "start timestamp",
];

/// Header names probed for the `speaker` field
pub const SPEAKER_COLUMNS: &[&str] = &["speaker", "Speaker"];

/// Header names probed for the `words` field. `Words` only applies when none
/// of the others has a value.
pub const WORDS_COLUMNS: &[&str] = &["words", "Transcript", "transcript", "Words"];

/// Source column that supplied each canonical field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSources {
    pub timestamp: Option<&'static str>,
    pub speaker: Option<&'static str>,
    pub words: Option<&'static str>,
}

impl ColumnSources {
    /// Fill in any field still unknown from `other`
    pub fn merge(&mut self, other: ColumnSources) {
        self.timestamp = self.timestamp.or(other.timestamp);
        self.speaker = self.speaker.or(other.speaker);
        self.words = self.words.or(other.words);
    }
}

/// Resolve one record into a canonical row.
///
/// Each field takes the trimmed value of the first probe column that is
/// present and non-empty; unresolved fields stay empty.
pub fn resolve_row(record: &HeaderRecord) -> (TranscriptRow, ColumnSources) {
    let timestamp = record.probe(TIMESTAMP_COLUMNS);
    let speaker = record.probe(SPEAKER_COLUMNS);
    let words = record.probe(WORDS_COLUMNS);

    let value = |hit: Option<(&str, &str)>| {
        hit.map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    };

    let row = TranscriptRow {
        timestamp: value(timestamp),
        speaker: value(speaker),
        words: value(words),
    };
    let sources = ColumnSources {
        timestamp: timestamp.map(|(key, _)| key),
        speaker: speaker.map(|(key, _)| key),
        words: words.map(|(key, _)| key),
    };

    (row, sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Delimiter;

    fn record(headers: &[&str], cells: &[&str]) -> HeaderRecord {
        HeaderRecord::from_cells(headers, cells, Delimiter::Comma)
    }

    #[test]
    fn test_timestamp_priority() {
        let r = record(
            &["start timestamp", "Start Timestamp", "Timestamp", "timestamp"],
            &["4", "3", "2", "1"],
        );
        let (row, sources) = resolve_row(&r);
        assert_eq!(row.timestamp, "1");
        assert_eq!(sources.timestamp, Some("timestamp"));

        let r = record(&["Timestamp", "Start Timestamp"], &["", "00:07"]);
        assert_eq!(resolve_row(&r).0.timestamp, "00:07");
    }

    #[test]
    fn test_end_timestamp_never_used() {
        let r = record(&["End Timestamp", "Speaker", "Transcript"], &["00:09", "Ann", "Bye"]);
        let (row, sources) = resolve_row(&r);

        assert_eq!(row, TranscriptRow::new("", "Ann", "Bye"));
        assert_eq!(sources.timestamp, None);
    }

    #[test]
    fn test_values_are_trimmed() {
        let r = record(&["speaker", "words"], &["  Alice ", "\tHello  "]);
        assert_eq!(resolve_row(&r).0, TranscriptRow::new("", "Alice", "Hello"));
    }

    #[test]
    fn test_whitespace_value_still_claims_priority() {
        // The raw value is non-empty, so it wins before trimming
        let r = record(&["timestamp", "Timestamp"], &["  ", "00:05"]);
        let (row, sources) = resolve_row(&r);

        assert_eq!(row.timestamp, "");
        assert_eq!(sources.timestamp, Some("timestamp"));
    }

    #[test]
    fn test_words_variants() {
        let r = record(&["Words", "transcript"], &["low", "high"]);
        assert_eq!(resolve_row(&r).0.words, "high");

        let r = record(&["Words"], &["only"]);
        assert_eq!(resolve_row(&r).0.words, "only");
    }

    #[test]
    fn test_merge_keeps_first_source() {
        let mut sources = ColumnSources {
            speaker: Some("Speaker"),
            ..Default::default()
        };
        sources.merge(ColumnSources {
            timestamp: Some("timestamp"),
            speaker: Some("speaker"),
            words: None,
        });

        assert_eq!(sources.timestamp, Some("timestamp"));
        assert_eq!(sources.speaker, Some("Speaker"));
        assert_eq!(sources.words, None);
    }
}
