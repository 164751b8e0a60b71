//! Corpus-wide document frequencies.

use ahash::AHashMap;

use crate::analysis::char_filter::lowercase::lowercase_term;
use crate::corpus::Corpus;
use crate::stats::term_frequency::TermFrequency;

/// Number of documents containing each term, built in one pass over the corpus.
///
/// Lookups are case-insensitive. Every term that occurs in some document of
/// the corpus has a document frequency of at least one.
#[derive(Clone, Debug, Default)]
pub struct DocumentFrequencyIndex {
    frequencies: AHashMap<Box<str>, u64>,
    corpus_size: usize,
}

impl DocumentFrequencyIndex {
    /// Index every document of `corpus`.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut index = DocumentFrequencyIndex::default();
        for document in corpus {
            index.add_document(&TermFrequency::from_terms(document.terms()));
        }
        index
    }

    fn add_document(&mut self, tf: &TermFrequency) {
        for term in tf.terms() {
            match self.frequencies.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.frequencies.insert(Box::from(term), 1);
                }
            }
        }
        self.corpus_size += 1;
    }

    /// Documents that contain `term`, zero for unknown terms.
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.frequencies
            .get(lowercase_term(term).as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Number of indexed documents, including those without any term.
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.frequencies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;

    fn corpus(documents: &[&[&str]]) -> Corpus {
        documents
            .iter()
            .enumerate()
            .map(|(i, terms)| {
                Document::new(
                    format!("/doc{i}.txt"),
                    terms.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_counts_documents_not_occurrences() {
        let corpus = corpus(&[&["cat", "dog", "cat"], &["dog", "bird"], &[]]);
        let index = DocumentFrequencyIndex::from_corpus(&corpus);

        assert_eq!(index.corpus_size(), 3);
        assert_eq!(index.vocabulary_size(), 3);
        assert_eq!(index.document_frequency("cat"), 1);
        assert_eq!(index.document_frequency("dog"), 2);
        assert_eq!(index.document_frequency("bird"), 1);
        assert_eq!(index.document_frequency("fish"), 0);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let corpus = corpus(&[&["Cat"], &["cat"]]);
        let index = DocumentFrequencyIndex::from_corpus(&corpus);
        assert_eq!(index.document_frequency("CAT"), 2);
    }

    #[test]
    fn test_empty_corpus() {
        let index = DocumentFrequencyIndex::from_corpus(&Corpus::new());
        assert_eq!(index.corpus_size(), 0);
        assert_eq!(index.vocabulary_size(), 0);
    }
}
