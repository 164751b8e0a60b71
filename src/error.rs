//! Error types for tfidf-report.
//!
//! Every fallible library operation returns [`Result`], whose error side is
//! the [`TfidfError`] enum. Failures the pipeline can recover from (an
//! unreadable stop word list, a document that cannot be read) are not
//! errors: they are reported as [`crate::corpus::LoadWarning`] values
//! alongside the successful result.
//!
//! # Examples
//!
//! ```
//! use tfidf_report::error::{Result, TfidfError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TfidfError::other("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tfidf-report operations.
#[derive(Error, Debug)]
pub enum TfidfError {
    /// I/O errors (reading documents, writing the report)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (char filters, tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Report assembly or output errors
    #[error("Report error: {0}")]
    Report(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TfidfError.
pub type Result<T> = std::result::Result<T, TfidfError>;

impl TfidfError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TfidfError::Analysis(msg.into())
    }

    /// Create a new report error.
    pub fn report<S: Into<String>>(msg: S) -> Self {
        TfidfError::Report(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TfidfError::Other(msg.into())
    }
}
