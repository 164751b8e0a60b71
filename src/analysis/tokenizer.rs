//! Tokenizers split normalized text into terms.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Splits on every match of a separator pattern
//!
//! # Examples
//!
//! ```
//! use tfidf_report::analysis::tokenizer::Tokenizer;
//! use tfidf_report::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new(r"\W+").unwrap();
//! let terms: Vec<_> = tokenizer.tokenize("hello, world").unwrap().collect();
//! assert_eq!(terms, ["hello", "world"]);
//! ```

use crate::analysis::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into terms.
///
/// The trait requires `Send + Sync` so one tokenizer can be shared by every
/// worker analysing documents in parallel.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of terms.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
