//! Per-document term counts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::lowercase::lowercase_term;

/// Occurrence counts of the distinct terms of one document.
///
/// Terms are lowercased before they are counted and iterate in the order
/// they first occurred.
///
/// ```
/// use tfidf_report::stats::TermFrequency;
///
/// let tf = TermFrequency::from_terms(["cat", "dog", "Cat"]);
/// assert_eq!(tf.get("cat"), 2);
/// assert_eq!(tf.iter().map(|(t, _)| t).collect::<Vec<_>>(), ["cat", "dog"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    counts: IndexMap<String, u64>,
    total: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every term of a bag of words.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tf = TermFrequency::new();
        for term in terms {
            tf.add_term(term.as_ref());
        }
        tf
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        *self.counts.entry(lowercase_term(term)).or_insert(0) += 1;
        self.total += 1;
        self
    }

    /// Occurrences of `term`, zero if it never occurred.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(lowercase_term(term).as_str()).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.get(term) > 0
    }

    /// Distinct terms with their counts, in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Distinct terms in first-occurrence order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of terms counted, repeats included.
    pub fn total_count(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_in_first_occurrence_order() {
        let tf = TermFrequency::from_terms(["dog", "cat", "dog", "bird", "cat", "dog"]);

        let counts: Vec<_> = tf.iter().collect();
        assert_eq!(counts, vec![("dog", 3), ("cat", 2), ("bird", 1)]);
        assert_eq!(tf.len(), 3);
        assert_eq!(tf.total_count(), 6);
    }

    #[test]
    fn test_lowercases_before_counting() {
        let tf = TermFrequency::from_terms(["Rust", "rust", "RUST"]);
        assert_eq!(tf.get("rust"), 3);
        assert_eq!(tf.get("Rust"), 3);
        assert_eq!(tf.terms().collect::<Vec<_>>(), ["rust"]);
    }

    #[test]
    fn test_missing_term() {
        let tf = TermFrequency::from_terms(["cat"]);
        assert_eq!(tf.get("dog"), 0);
        assert!(!tf.contains("dog"));
        assert!(tf.contains("cat"));
    }

    #[test]
    fn test_empty() {
        let tf = TermFrequency::from_terms(Vec::<String>::new());
        assert!(tf.is_empty());
        assert_eq!(tf.total_count(), 0);
    }
}
