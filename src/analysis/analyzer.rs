//! Analyzer implementations that combine char filters, a tokenizer and token filters.

mod analyzer;
mod pipeline;
mod plain_text;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use plain_text::PlainTextAnalyzer;
