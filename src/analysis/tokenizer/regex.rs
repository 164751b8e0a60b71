//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::TokenStream;
use crate::error::{Result, TfidfError};

/// A tokenizer that yields the text between matches of a separator regex.
///
/// Empty pieces are never emitted, so splitting `" a  b"` on `r"\W+"`
/// yields exactly `["a", "b"]`.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    separator: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer splitting on `separator`.
    pub fn new(separator: &str) -> Result<Self> {
        let regex = Regex::new(separator)
            .map_err(|e| TfidfError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            separator: Arc::new(regex),
        })
    }

    /// Get the separator pattern.
    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let terms: Vec<String> = self
            .separator
            .split(text)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Box::new(terms.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
