use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::{Result, TfidfError};

/// Pattern that deletes everything except ASCII letters and the space character.
pub const NON_LETTER_PATTERN: &str = "[^a-zA-Z ]";

/// A char filter that replaces every match of a regex with a literal string.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    ///
    /// The replacement is inserted as is; `$` carries no group meaning.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| TfidfError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes every non-letter, non-space character.
    ///
    /// Digits, punctuation, tabs and line breaks are removed outright, so
    /// the letters on either side of them end up in the same word.
    pub fn strip_non_letters() -> Result<Self> {
        Self::new(NON_LETTER_PATTERN, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
