//! Weighting formulas.

use serde::{Deserialize, Serialize};

/// `log10(corpus_size / document_frequency)`.
///
/// A term found in every document scores `0.0`. A document frequency of zero
/// gives positive infinity; such terms are never reported.
pub fn inverse_document_frequency(corpus_size: usize, document_frequency: u64) -> f64 {
    (corpus_size as f64 / document_frequency as f64).log10()
}

/// `1 + log10(term_frequency)`.
pub fn normalized_term_frequency(term_frequency: u64) -> f64 {
    1.0 + (term_frequency as f64).log10()
}

/// The term weights a report carries for every term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// The raw occurrence count.
    RawFrequency,
    /// `1 + log10(tf)`.
    LogNormalized,
    /// `tf × idf`.
    RawTfIdf,
    /// `(1 + log10(tf)) × idf`.
    LogTfIdf,
}

impl Weighting {
    /// Weight of a term occurring `term_frequency` times, given its IDF.
    ///
    /// ```
    /// use tfidf_report::stats::Weighting;
    ///
    /// assert_eq!(Weighting::RawTfIdf.score(3, 0.5), 1.5);
    /// assert_eq!(Weighting::LogNormalized.score(10, 0.5), 2.0);
    /// ```
    pub fn score(self, term_frequency: u64, idf: f64) -> f64 {
        match self {
            Weighting::RawFrequency => term_frequency as f64,
            Weighting::LogNormalized => normalized_term_frequency(term_frequency),
            Weighting::RawTfIdf => term_frequency as f64 * idf,
            Weighting::LogTfIdf => normalized_term_frequency(term_frequency) * idf,
        }
    }
}
