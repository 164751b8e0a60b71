//! # tfidf-report
//!
//! Term statistics for a directory of plain-text documents, written as a
//! CSV report.
//!
//! ## Features
//!
//! - Text analysis pipeline: char filters, a regex tokenizer and a stop filter
//! - Term frequency, document frequency, IDF and TF-IDF per document and term
//! - Document frequencies from a single inverted index over the corpus
//! - Parallel document loading and scoring with rayon
//! - Deterministic output: documents in path order, terms in first-occurrence order
//!
//! ## Example
//!
//! ```
//! use tfidf_report::corpus::{Corpus, Document};
//! use tfidf_report::report::Report;
//! use tfidf_report::stats::compute_corpus_stats;
//!
//! let corpus = Corpus::from_documents(vec![
//!     Document::new("/doc1.txt", vec!["cat".into(), "dog".into(), "cat".into()]),
//!     Document::new("/doc2.txt", vec!["dog".into(), "bird".into()]),
//! ]);
//!
//! let stats = compute_corpus_stats(&corpus, false);
//! let report = Report::from_document_stats(&stats);
//! assert_eq!(report.rows()[1], "/doc1.txt,dog,1,2,0.0,1.0,0.0,0.0");
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stats;

pub mod prelude {
    pub use crate::corpus::{Corpus, CorpusLoader, Document, LoadWarning, StopWordCase, StopWords};
    pub use crate::error::{Result, TfidfError};
    pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineOutcome};
    pub use crate::report::Report;
    pub use crate::stats::{DocumentStats, TermStats, Weighting};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
