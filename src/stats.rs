//! Term statistics.
//!
//! Term frequencies are counted per document, document frequencies come from
//! an index built once over the whole corpus, and the weighting formulas
//! combine the two.

pub mod document_frequency;
pub mod term_frequency;
pub mod term_stats;
pub mod weighting;

pub use document_frequency::DocumentFrequencyIndex;
pub use term_frequency::TermFrequency;
pub use term_stats::{DocumentStats, TermStats, compute_corpus_stats, compute_document_stats};
pub use weighting::{Weighting, inverse_document_frequency, normalized_term_frequency};
