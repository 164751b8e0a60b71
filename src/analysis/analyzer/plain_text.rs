//! The analyzer used for corpus documents.
//!
//! ```text
//! lowercase text → delete [^a-zA-Z ] → split on \W+ → drop stop words
//! ```
//!
//! Lowercasing runs over the whole text before anything is deleted, and the
//! deletion does not leave a separator behind: `"co2"` becomes `"co"` and
//! `"one\ntwo"` becomes the single token `"onetwo"`.

use std::sync::Arc;

use crate::analysis::TokenStream;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Pattern the normalized text is split on.
pub const WORD_SEPARATOR_PATTERN: &str = r"\W+";

pub struct PlainTextAnalyzer {
    inner: PipelineAnalyzer,
    stop_filter: StopFilter,
}

impl PlainTextAnalyzer {
    /// Build the document analyzer around the given stop filter.
    pub fn new(stop_filter: StopFilter) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new(WORD_SEPARATOR_PATTERN)?);
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::strip_non_letters()?))
            .add_filter(Arc::new(stop_filter.clone()));

        Ok(PlainTextAnalyzer { inner, stop_filter })
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }
}

impl Analyzer for PlainTextAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}

impl std::fmt::Debug for PlainTextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlainTextAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_filter.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn terms(analyzer: &PlainTextAnalyzer, text: &str) -> Vec<String> {
        analyzer.analyze_terms(text).unwrap()
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        let analyzer = PlainTextAnalyzer::new(StopFilter::new()).unwrap();
        assert_eq!(terms(&analyzer, "Cat, dog 123!"), vec!["cat", "dog"]);
    }

    #[test]
    fn test_deleted_characters_concatenate_letters() {
        let analyzer = PlainTextAnalyzer::new(StopFilter::new()).unwrap();
        assert_eq!(terms(&analyzer, "co2"), vec!["co"]);
        assert_eq!(terms(&analyzer, "h2o rocks"), vec!["ho", "rocks"]);
        assert_eq!(
            terms(&analyzer, "first line\r\nsecond line"),
            vec!["first", "linesecond", "line"]
        );
    }

    #[test]
    fn test_removes_stop_words_keeping_multiplicity() {
        let analyzer = PlainTextAnalyzer::new(StopFilter::from_words(vec!["the", "a"])).unwrap();
        assert_eq!(
            terms(&analyzer, "the cat the dog a fish cat"),
            vec!["cat", "dog", "fish", "cat"]
        );
    }

    #[test]
    fn test_uppercase_stop_words_never_match() {
        // Text is lowercased before stop word removal, entries are not
        let analyzer = PlainTextAnalyzer::new(StopFilter::from_words(vec!["The"])).unwrap();
        assert_eq!(terms(&analyzer, "The cat"), vec!["the", "cat"]);

        let analyzer =
            PlainTextAnalyzer::new(StopFilter::from_words(vec!["The"]).ignore_case(true)).unwrap();
        assert_eq!(terms(&analyzer, "The cat"), vec!["cat"]);
    }

    #[test]
    fn test_empty_and_letterless_text() {
        let analyzer = PlainTextAnalyzer::new(StopFilter::new()).unwrap();
        assert!(terms(&analyzer, "").is_empty());
        assert!(terms(&analyzer, "1234 !!! 42").is_empty());
    }

    #[test]
    fn test_large_punctuated_document() {
        let lines = 30_000;
        let text: String = (0..lines)
            .map(|i| format!("Line {i}, the quick brown fox jumps.\n"))
            .collect();
        assert!(text.len() > 1_000_000);

        let analyzer = PlainTextAnalyzer::new(StopFilter::from_words(vec!["the"])).unwrap();
        let started = Instant::now();
        let terms = terms(&analyzer, &text);
        let elapsed = started.elapsed();

        // The deleted line break glues "jumps" to the next "line"
        assert_eq!(terms.len(), 4 * lines + 1);
        assert_eq!(terms.first().map(String::as_str), Some("line"));
        assert_eq!(terms.last().map(String::as_str), Some("jumps"));
        assert_eq!(terms.iter().filter(|t| *t == "jumpsline").count(), lines - 1);
        assert!(elapsed < Duration::from_secs(30), "analysis took {elapsed:?}");
    }

    #[test]
    fn test_analyzer_name() {
        let analyzer = PlainTextAnalyzer::new(StopFilter::new()).unwrap();
        assert_eq!(analyzer.name(), "plain_text");
        assert!(analyzer.stop_filter().is_empty());
    }
}
