//! An analyzer assembled from char filters, one tokenizer and token filters.
//!
//! Text flows through the stages in this order, each stage making one pass
//! over the output of the previous one:
//! 1. Char filters, in the order they were added
//! 2. The tokenizer
//! 3. Token filters, in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tfidf_report::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use tfidf_report::analysis::char_filter::lowercase::LowercaseCharFilter;
//! use tfidf_report::analysis::token_filter::stop::StopFilter;
//! use tfidf_report::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new(r"\s+").unwrap()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
//!
//! let terms = analyzer.analyze_terms("Hello THE world AND test").unwrap();
//! assert_eq!(terms, ["hello", "world", "test"]);
//! ```

use std::sync::Arc;

use crate::analysis::TokenStream;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Start a pipeline around `tokenizer` with no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            char_filters: Vec::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a char filter.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Append a token filter.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let normalized = self
            .char_filters
            .iter()
            .fold(text.to_string(), |current, char_filter| char_filter.filter(&current));

        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(&normalized)?, |terms, filter| {
                filter.filter(terms)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
