//! Stop word lists.
//!
//! The list file is plain text with one entry per line. Lines end in
//! `\r\n`; a file written with bare `\n` endings therefore reads as a single
//! long entry. Every `'` character is removed before the text is split, so
//! quoted entries such as `'the'` work.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::StopFilter;
use crate::error::Result;

/// Line terminator separating stop word entries.
pub const STOP_WORD_LINE_TERMINATOR: &str = "\r\n";

/// How tokens are compared against stop word entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWordCase {
    /// Byte-for-byte comparison. Entries with uppercase letters never match,
    /// since document text is lowercased before stop words are removed.
    #[default]
    Sensitive,
    /// Entries are lowercased before comparison.
    Insensitive,
}

/// An ordered list of stop words as read from a list file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWords {
    words: Vec<String>,
}

impl StopWords {
    /// Create an empty stop word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the raw contents of a stop word file.
    ///
    /// ```
    /// use tfidf_report::corpus::StopWords;
    ///
    /// let stop_words = StopWords::parse("'the'\r\na\r\n");
    /// assert_eq!(stop_words.words(), ["the", "a"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let words = raw
            .replace('\'', "")
            .split(STOP_WORD_LINE_TERMINATOR)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();

        StopWords { words }
    }

    /// Read and parse a stop word file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build the stop filter used by the document analyzer.
    pub fn to_stop_filter(&self, case: StopWordCase) -> StopFilter {
        StopFilter::from_words(self.words.iter().cloned())
            .ignore_case(case == StopWordCase::Insensitive)
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StopWords {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_crlf_list() {
        let stop_words = StopWords::parse("the\r\na\r\n\r\nan");
        assert_eq!(stop_words.words(), ["the", "a", "an"]);
        assert_eq!(stop_words.len(), 3);
    }

    #[test]
    fn test_parse_strips_quotes() {
        let stop_words = StopWords::parse("'the'\r\ndon't");
        assert_eq!(stop_words.words(), ["the", "dont"]);
    }

    #[test]
    fn test_parse_bare_newlines_stay_one_entry() {
        let stop_words = StopWords::parse("the\na\n");
        assert_eq!(stop_words.words(), ["the\na\n"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(StopWords::parse("").is_empty());
        assert!(StopWords::parse("''\r\n").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"the\r\na\r\n").unwrap();

        let stop_words = StopWords::load(file.path()).unwrap();
        assert_eq!(stop_words.words(), ["the", "a"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StopWords::load(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_to_stop_filter() {
        let stop_words: StopWords = ["The", "a"].into_iter().collect();

        let filter = stop_words.to_stop_filter(StopWordCase::Sensitive);
        assert!(filter.is_stop_word("a"));
        assert!(!filter.is_stop_word("the"));

        let filter = stop_words.to_stop_filter(StopWordCase::Insensitive);
        assert!(filter.is_stop_word("the"));
    }
}
