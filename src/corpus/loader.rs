//! Loading a directory of text files into a [`Corpus`].

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, PlainTextAnalyzer};
use crate::corpus::document::{Corpus, Document};
use crate::corpus::stop_words::{StopWordCase, StopWords};
use crate::corpus::warning::LoadWarning;
use crate::error::{Result, TfidfError};

/// A loaded corpus together with everything that was skipped on the way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub corpus: Corpus,
    pub warnings: Vec<LoadWarning>,
}

/// Reads every regular file of a directory and analyzes it into a document.
///
/// Entries are visited in path order and subdirectories are ignored, so two
/// runs over the same directory produce the same corpus.
#[derive(Debug)]
pub struct CorpusLoader {
    analyzer: PlainTextAnalyzer,
    parallel: bool,
}

impl CorpusLoader {
    /// Create a loader that removes the given stop words.
    pub fn new(stop_words: &StopWords, case: StopWordCase) -> Result<Self> {
        Ok(CorpusLoader {
            analyzer: PlainTextAnalyzer::new(stop_words.to_stop_filter(case))?,
            parallel: true,
        })
    }

    /// Read and analyze documents on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load every document in `dir`.
    ///
    /// A directory that cannot be listed yields an empty corpus and a
    /// warning. Files that cannot be read, are zero bytes long or fail to
    /// analyze are skipped with a warning each.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> LoadOutcome {
        let dir = dir.as_ref();
        let mut warnings = Vec::new();

        let files = list_files(dir, &mut warnings);
        log::info!("found {} files in {}", files.len(), dir.display());

        let loaded: Vec<_> = if self.parallel {
            files.par_iter().map(|path| self.load_document(path)).collect()
        } else {
            files.iter().map(|path| self.load_document(path)).collect()
        };

        let mut documents = Vec::with_capacity(loaded.len());
        for result in loaded {
            match result {
                Ok(document) => documents.push(document),
                Err(warning) => {
                    log::warn!("{warning}");
                    warnings.push(warning);
                }
            }
        }

        LoadOutcome {
            corpus: Corpus::from_documents(documents),
            warnings,
        }
    }

    /// Read and analyze one file.
    pub fn load_document(&self, path: &Path) -> std::result::Result<Document, LoadWarning> {
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(LoadWarning::DocumentUnreadable { path, source }),
        };
        if bytes.is_empty() {
            return Err(LoadWarning::DocumentEmpty { path });
        }

        let text = String::from_utf8_lossy(&bytes);
        let terms = match self.analyzer.analyze_terms(&text) {
            Ok(terms) => terms,
            Err(source) => return Err(LoadWarning::DocumentAnalysisFailed { path, source }),
        };

        log::debug!("{}: {} terms", path.display(), terms.len());
        Ok(Document::new(path, terms))
    }
}

/// Read the stop word list at `path`, falling back to an empty list.
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> (StopWords, Option<LoadWarning>) {
    let path = path.as_ref();
    match StopWords::load(path) {
        Ok(stop_words) if stop_words.is_empty() => {
            let warning = LoadWarning::StopWordsEmpty {
                path: path.to_path_buf(),
            };
            log::warn!("{warning}");
            (stop_words, Some(warning))
        }
        Ok(stop_words) => {
            log::info!("loaded {} stop words from {}", stop_words.len(), path.display());
            (stop_words, None)
        }
        Err(err) => {
            let source = match err {
                TfidfError::Io(source) => source,
                other => std::io::Error::other(other.to_string()),
            };
            let warning = LoadWarning::StopWordsUnreadable {
                path: path.to_path_buf(),
                source,
            };
            log::warn!("{warning}");
            (StopWords::new(), Some(warning))
        }
    }
}

/// Regular files directly inside `dir`, sorted by path.
fn list_files(dir: &Path, warnings: &mut Vec<LoadWarning>) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            let warning = LoadWarning::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            };
            log::warn!("{warning}");
            warnings.push(warning);
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let warning = LoadWarning::DirectoryUnreadable {
                    path: dir.to_path_buf(),
                    source,
                };
                log::warn!("{warning}");
                warnings.push(warning);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            log::debug!("skipping subdirectory {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort();
    files
}
