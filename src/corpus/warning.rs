//! Recoverable loading failures.
//!
//! Nothing that goes wrong while reading the stop word list or a document
//! aborts a run. Each failure becomes a [`LoadWarning`]: it is logged where
//! it happens and returned next to the corpus, so callers can inspect what
//! was skipped.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::TfidfError;

/// One recovered failure, tagged with the path it concerns.
#[derive(Debug, Error)]
pub enum LoadWarning {
    /// The stop word list could not be read; the run continues without stop words.
    #[error("stop word list {} could not be read: {source}", .path.display())]
    StopWordsUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The stop word list was read but holds no entries.
    #[error("stop word list {} is empty", .path.display())]
    StopWordsEmpty { path: PathBuf },

    /// The input directory (or one of its entries) could not be listed.
    #[error("input directory {} could not be listed: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document could not be read and is left out of the corpus.
    #[error("document {} could not be read: {source}", .path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A zero-length document; it is left out of the corpus.
    #[error("document {} is empty", .path.display())]
    DocumentEmpty { path: PathBuf },

    /// A document whose text could not be analyzed; it is left out of the corpus.
    #[error("document {} could not be analyzed: {source}", .path.display())]
    DocumentAnalysisFailed {
        path: PathBuf,
        #[source]
        source: TfidfError,
    },
}

impl LoadWarning {
    /// The file or directory this warning is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadWarning::StopWordsUnreadable { path, .. }
            | LoadWarning::StopWordsEmpty { path }
            | LoadWarning::DirectoryUnreadable { path, .. }
            | LoadWarning::DocumentUnreadable { path, .. }
            | LoadWarning::DocumentEmpty { path }
            | LoadWarning::DocumentAnalysisFailed { path, .. } => path,
        }
    }

    /// Whether this warning removed a document from the corpus.
    pub fn is_skipped_document(&self) -> bool {
        matches!(
            self,
            LoadWarning::DocumentUnreadable { .. }
                | LoadWarning::DocumentEmpty { .. }
                | LoadWarning::DocumentAnalysisFailed { .. }
        )
    }
}
