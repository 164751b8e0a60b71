//! Whole-text lowercasing char filter.
//!
//! Lowercasing happens before any character is stripped, so characters whose
//! lowercase form is ASCII (KELVIN SIGN `K` becomes `k`) survive the
//! `[^a-zA-Z ]` pass that follows.

use super::CharFilter;

/// Lowercase a term or a whole text.
///
/// ASCII input takes the cheap `to_ascii_lowercase` path.
pub fn lowercase_term(text: &str) -> String {
    if text.is_ascii() {
        text.to_ascii_lowercase()
    } else {
        text.to_lowercase()
    }
}

/// A char filter that lowercases the full input text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        lowercase_term(input)
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
