use std::collections::HashMap;

use super::Delimiter;

/// Key holding cells of empty-named header columns and cells beyond the header
pub const SENTINEL_KEY: &str = "";

/// A data row parsed against the header row.
///
/// Maps header name to cell value. A row shorter than the header leaves the
/// trailing keys unset; a longer row collects the extra cells under
/// [`SENTINEL_KEY`], joined by the file's delimiter. When a header name is
/// repeated, the right-most column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    fields: HashMap<String, String>,
}

impl HeaderRecord {
    /// Build a record from the header names and the cells of one row
    pub fn from_cells<S: AsRef<str>>(
        headers: &[S],
        cells: &[&str],
        delimiter: Delimiter,
    ) -> Self {
        let mut fields = HashMap::with_capacity(headers.len());
        let mut overflow: Vec<&str> = Vec::new();

        for (index, cell) in cells.iter().enumerate() {
            match headers.get(index) {
                Some(name) => {
                    fields.insert(name.as_ref().to_string(), cell.to_string());
                }
                None => overflow.push(*cell),
            }
        }

        if !overflow.is_empty() {
            let separator = delimiter.as_char().to_string();
            let extra = overflow.join(&separator);
            fields
                .entry(SENTINEL_KEY.to_string())
                .and_modify(|existing: &mut String| {
                    existing.push_str(&separator);
                    existing.push_str(&extra);
                })
                .or_insert(extra);
        }

        Self { fields }
    }

    /// Raw value of a column, if the row has a cell for it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Drop the sentinel key when its value is blank.
    ///
    /// Returns true if a key was removed. A leading stray delimiter in an
    /// export produces exactly this artifact.
    pub fn remove_blank_sentinel(&mut self) -> bool {
        let blank = self
            .fields
            .get(SENTINEL_KEY)
            .is_some_and(|value| value.trim().is_empty());
        if blank {
            self.fields.remove(SENTINEL_KEY);
        }
        blank
    }

    /// First key in `keys` that is present with a non-empty raw value.
    ///
    /// Returns the matching key together with its untrimmed value.
    pub fn probe<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &str)> {
        keys.iter().find_map(|&key| {
            self.get(key)
                .filter(|value| !value.is_empty())
                .map(|value| (key, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_row_leaves_keys_unset() {
        let headers: &[&str] = &["timestamp", "speaker", "words"];
        let record = HeaderRecord::from_cells(headers, &["00:01"], Delimiter::Comma);

        assert_eq!(record.get("timestamp"), Some("00:01"));
        assert!(!record.contains("speaker"));
        assert!(!record.contains("words"));
    }

    #[test]
    fn test_long_row_collects_overflow_under_sentinel() {
        let headers: &[&str] = &["speaker", "words"];
        let cells = ["Alice", "Hi", "extra", "more"];
        let record = HeaderRecord::from_cells(headers, &cells, Delimiter::Semicolon);

        assert_eq!(record.get(SENTINEL_KEY), Some("extra;more"));
    }

    #[test]
    fn test_empty_header_column_and_overflow_share_sentinel() {
        let headers: &[&str] = &["", "speaker"];
        let record = HeaderRecord::from_cells(headers, &["", "Bob", "tail"], Delimiter::Comma);

        assert_eq!(record.get(SENTINEL_KEY), Some(",tail"));
    }

    #[test]
    fn test_duplicate_header_rightmost_wins() {
        let headers: &[&str] = &["speaker", "speaker"];
        let record = HeaderRecord::from_cells(headers, &["Alice", "Bob"], Delimiter::Comma);

        assert_eq!(record.get("speaker"), Some("Bob"));
    }

    #[test]
    fn test_remove_blank_sentinel() {
        let headers: &[&str] = &["", "speaker"];
        let mut record = HeaderRecord::from_cells(headers, &["  ", "Bob"], Delimiter::Comma);
        assert!(record.remove_blank_sentinel());
        assert!(!record.contains(SENTINEL_KEY));

        let mut kept = HeaderRecord::from_cells(headers, &["note", "Bob"], Delimiter::Comma);
        assert!(!kept.remove_blank_sentinel());
        assert_eq!(kept.get(SENTINEL_KEY), Some("note"));
    }

    #[test]
    fn test_probe_skips_empty_values() {
        let headers: &[&str] = &["timestamp", "Timestamp"];
        let record = HeaderRecord::from_cells(headers, &["", "00:03"], Delimiter::Comma);

        assert_eq!(
            record.probe(&["timestamp", "Timestamp"]),
            Some(("Timestamp", "00:03"))
        );
        assert_eq!(record.probe(&["missing"]), None);
    }
}
