use crate::analysis::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert raw text into terms.
///
/// An analyzer runs the complete analysis pipeline (char filters, the
/// tokenizer and every token filter) and is shared across the workers that
/// analyse documents in parallel, hence the `Send + Sync` bound.
///
/// # Examples
///
/// ```
/// use tfidf_report::analysis::analyzer::{Analyzer, PlainTextAnalyzer};
/// use tfidf_report::analysis::token_filter::stop::StopFilter;
///
/// let analyzer = PlainTextAnalyzer::new(StopFilter::new()).unwrap();
/// let terms = analyzer.analyze_terms("Cat, dog 123!").unwrap();
/// assert_eq!(terms, ["cat", "dog"]);
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of terms.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for logs and debugging).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the terms.
    fn analyze_terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.collect())
    }
}
