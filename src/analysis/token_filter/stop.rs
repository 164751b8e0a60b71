//! Stop filter implementation.
//!
//! Removes tokens that appear in a configured stop word list. Matching is
//! exact and case-sensitive unless the filter is built with
//! [`StopFilter::ignore_case`]. Because the analysis pipeline lowercases all
//! text first, a stop word containing an uppercase letter never matches in
//! case-sensitive mode.
//!
//! # Examples
//!
//! ```
//! use tfidf_report::analysis::token_filter::Filter;
//! use tfidf_report::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_words(vec!["the", "a"]);
//! let terms = ["the", "quick", "fox"].map(String::from);
//!
//! let result: Vec<_> = filter.filter(Box::new(terms.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result, ["quick", "fox"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::TokenStream;
use crate::analysis::char_filter::lowercase::lowercase_term;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether tokens and stop words are compared after lowercasing
    ignore_case: bool,
}

impl StopFilter {
    /// Create a stop filter that removes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use tfidf_report::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words.into_iter().map(|s| s.into()).collect();
        StopFilter {
            stop_words: Arc::new(stop_words),
            ignore_case: false,
        }
    }

    /// Compare tokens and stop words case-insensitively.
    ///
    /// The stop word set is lowercased once here; tokens are lowercased as
    /// they are checked.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        if ignore && !self.ignore_case {
            let lowered: HashSet<String> =
                self.stop_words.iter().map(|w| lowercase_term(w)).collect();
            self.stop_words = Arc::new(lowered);
        }
        self.ignore_case = ignore;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.ignore_case {
            self.stop_words.contains(&lowercase_term(word))
        } else {
            self.stop_words.contains(word)
        }
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.is_empty() {
            return Ok(tokens);
        }

        let kept: Vec<String> = tokens.filter(|term| !self.is_stop_word(term)).collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
