//! Documents and the corpus they form.

use std::path::{Path, PathBuf};

/// One analyzed input file.
///
/// `terms` is the file's bag of words in reading order, with duplicates kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    terms: Vec<String>,
}

impl Document {
    pub fn new<P: Into<PathBuf>>(path: P, terms: Vec<String>) -> Self {
        Document {
            path: path.into(),
            terms,
        }
    }

    /// Absolute path of the file this document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms, counting repeats.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The ordered set of documents a report is computed over.
///
/// Documents keep the order they were loaded in, which is the order their
/// rows appear in the report. A document without terms still counts towards
/// the corpus size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Number of documents, the `N` of the IDF formula.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Corpus {
            documents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_document_accessors() {
        let document = Document::new("/tmp/a.txt", terms(&["cat", "dog", "cat"]));
        assert_eq!(document.path(), Path::new("/tmp/a.txt"));
        assert_eq!(document.len(), 3);
        assert!(!document.is_empty());
        assert_eq!(document.terms()[2], "cat");
    }

    #[test]
    fn test_corpus_keeps_order_and_empty_documents() {
        let corpus: Corpus = vec![
            Document::new("/b.txt", terms(&["bird"])),
            Document::new("/a.txt", Vec::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(corpus.len(), 2);
        let paths: Vec<_> = corpus.iter().map(|d| d.path().to_path_buf()).collect();
        assert_eq!(paths, vec![PathBuf::from("/b.txt"), PathBuf::from("/a.txt")]);
        assert!(corpus.documents()[1].is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert_eq!((&corpus).into_iter().count(), 0);
    }
}
