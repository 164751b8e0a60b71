//! Text analysis module for tfidf-report.
//!
//! Turns raw document text into the bag of terms the statistics are
//! computed over: char filters normalize the text, a tokenizer splits it,
//! and token filters drop stop words. Every stage works on plain strings
//! and does a single pass over its input.

pub mod analyzer;
pub mod char_filter;
pub mod token_filter;
pub mod tokenizer;

/// The terms handed from one analysis stage to the next.
pub type TokenStream = Box<dyn Iterator<Item = String>>;
