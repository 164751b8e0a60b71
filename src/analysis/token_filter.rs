//! Token filters receive the terms produced by a tokenizer and return a new
//! stream, dropping terms along the way.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words

use crate::analysis::TokenStream;
use crate::error::Result;

/// Trait for filters that transform term streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a term stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;
