//! Corpus loading.
//!
//! A corpus is every regular file directly inside the input directory,
//! each analyzed into a bag of terms with the stop words removed.

pub mod document;
pub mod loader;
pub mod stop_words;
pub mod warning;

pub use document::{Corpus, Document};
pub use loader::{CorpusLoader, LoadOutcome, load_stop_words};
pub use stop_words::{StopWordCase, StopWords};
pub use warning::LoadWarning;
