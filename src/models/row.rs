use serde::Serialize;

/// Column names of the canonical output schema, in output order
pub const CANONICAL_HEADER: [&str; 3] = ["timestamp", "speaker", "words"];

/// Field delimiter of a transcript export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `,` - also the delimiter of every rewritten file
    Comma,
    /// `;` - common in spreadsheet exports from European locales
    Semicolon,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}

/// One row of a canonical transcript.
///
/// Field order matches [`CANONICAL_HEADER`]; unresolved fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptRow {
    pub timestamp: String,
    pub speaker: String,
    pub words: String,
}

impl TranscriptRow {
    pub fn new(
        timestamp: impl Into<String>,
        speaker: impl Into<String>,
        words: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            speaker: speaker.into(),
            words: words.into(),
        }
    }

    /// True when the row carries no information at all
    pub fn is_blank(&self) -> bool {
        self.timestamp.is_empty() && self.speaker.is_empty() && self.words.is_empty()
    }
}
