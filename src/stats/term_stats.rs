//! Per-document term statistics.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Document};
use crate::stats::document_frequency::DocumentFrequencyIndex;
use crate::stats::term_frequency::TermFrequency;
use crate::stats::weighting::{Weighting, inverse_document_frequency};

/// Statistics of one distinct term within one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermStats {
    pub term: String,
    /// Occurrences in the document, at least one.
    pub term_frequency: u64,
    /// Documents of the corpus containing the term, between one and the corpus size.
    pub document_frequency: u64,
    pub inverse_document_frequency: f64,
    pub normalized_term_frequency: f64,
    /// `term_frequency × inverse_document_frequency`.
    pub raw_f_idf: f64,
    /// `normalized_term_frequency × inverse_document_frequency`.
    pub tf_idf: f64,
}

impl TermStats {
    pub fn new(
        term: impl Into<String>,
        term_frequency: u64,
        document_frequency: u64,
        corpus_size: usize,
    ) -> Self {
        let idf = inverse_document_frequency(corpus_size, document_frequency);
        TermStats {
            term: term.into(),
            term_frequency,
            document_frequency,
            inverse_document_frequency: idf,
            normalized_term_frequency: Weighting::LogNormalized.score(term_frequency, idf),
            raw_f_idf: Weighting::RawTfIdf.score(term_frequency, idf),
            tf_idf: Weighting::LogTfIdf.score(term_frequency, idf),
        }
    }
}

/// All term statistics of one document, in first-occurrence order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub path: PathBuf,
    pub terms: Vec<TermStats>,
}

/// Compute the statistics of one document against an indexed corpus.
pub fn compute_document_stats(document: &Document, index: &DocumentFrequencyIndex) -> DocumentStats {
    let tf = TermFrequency::from_terms(document.terms());
    let terms = tf
        .iter()
        .map(|(term, count)| {
            TermStats::new(term, count, index.document_frequency(term), index.corpus_size())
        })
        .collect();

    DocumentStats {
        path: document.path().to_path_buf(),
        terms,
    }
}

/// Compute the statistics of every document of `corpus`, in corpus order.
///
/// The corpus is indexed once up front, then documents are scored
/// independently, on the rayon thread pool when `parallel` is set.
pub fn compute_corpus_stats(corpus: &Corpus, parallel: bool) -> Vec<DocumentStats> {
    let index = DocumentFrequencyIndex::from_corpus(corpus);
    log::debug!(
        "indexed {} documents, {} distinct terms",
        index.corpus_size(),
        index.vocabulary_size()
    );

    if parallel {
        corpus
            .documents()
            .par_iter()
            .map(|document| compute_document_stats(document, &index))
            .collect()
    } else {
        corpus
            .iter()
            .map(|document| compute_document_stats(document, &index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn term<'a>(stats: &'a DocumentStats, term: &str) -> &'a TermStats {
        stats.terms.iter().find(|s| s.term == term).unwrap()
    }

    fn document(path: &str, text: &str) -> Document {
        Document::new(path, text.split_whitespace().map(String::from).collect())
    }

    fn two_document_corpus() -> Corpus {
        Corpus::from_documents(vec![
            document("/doc1.txt", "cat dog cat"),
            document("/doc2.txt", "dog bird"),
        ])
    }

    #[test]
    fn test_two_document_corpus() {
        let stats = compute_corpus_stats(&two_document_corpus(), false);
        assert_eq!(stats.len(), 2);

        let doc1 = &stats[0];
        assert_eq!(doc1.path, PathBuf::from("/doc1.txt"));
        let terms: Vec<_> = doc1.terms.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, ["cat", "dog"]);

        let cat = term(doc1, "cat");
        assert_eq!(cat.term_frequency, 2);
        assert_eq!(cat.document_frequency, 1);
        assert!((cat.inverse_document_frequency - 0.301_029_995_663_981_2).abs() < EPSILON);
        assert!((cat.raw_f_idf - 2.0 * cat.inverse_document_frequency).abs() < EPSILON);
        assert!(
            (cat.tf_idf - (1.0 + 2f64.log10()) * cat.inverse_document_frequency).abs() < EPSILON
        );

        let dog = term(doc1, "dog");
        assert_eq!(dog.term_frequency, 1);
        assert_eq!(dog.document_frequency, 2);
        assert_eq!(dog.inverse_document_frequency, 0.0);
        assert_eq!(dog.normalized_term_frequency, 1.0);
        assert_eq!(dog.tf_idf, 0.0);

        let doc2 = &stats[1];
        let terms: Vec<_> = doc2.terms.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, ["dog", "bird"]);
        assert_eq!(term(doc2, "bird").document_frequency, 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = Corpus::from_documents(
            (0..50)
                .map(|i| {
                    let text = format!("common term{} term{}", i % 7, i % 3);
                    document(&format!("/doc{i}.txt"), &text)
                })
                .collect(),
        );
        assert_eq!(
            compute_corpus_stats(&corpus, true),
            compute_corpus_stats(&corpus, false)
        );
    }

    #[test]
    fn test_document_without_terms_counts_towards_corpus_size() {
        let corpus = Corpus::from_documents(vec![
            document("/a.txt", "cat"),
            document("/b.txt", ""),
        ]);
        let stats = compute_corpus_stats(&corpus, false);

        assert!(stats[1].terms.is_empty());
        let cat = term(&stats[0], "cat");
        assert!((cat.inverse_document_frequency - 2f64.log10()).abs() < EPSILON);
    }

    #[test]
    fn test_term_stats_weights() {
        let stats = TermStats::new("cat", 2, 1, 2);
        let idf = stats.inverse_document_frequency;
        assert_eq!(stats.normalized_term_frequency, Weighting::LogNormalized.score(2, idf));
        assert_eq!(stats.raw_f_idf, Weighting::RawTfIdf.score(2, idf));
        assert_eq!(stats.tf_idf, Weighting::LogTfIdf.score(2, idf));
    }
}
