//! The end-to-end run: load the corpus, compute statistics, render the report.
//!
//! # Examples
//!
//! ```no_run
//! use tfidf_report::pipeline::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::new("docs", "report.csv", "stopwords.txt");
//! let pipeline = Pipeline::new(config);
//!
//! let outcome = pipeline.run()?;
//! for warning in &outcome.warnings {
//!     eprintln!("skipped: {warning}");
//! }
//! pipeline.write(&outcome)?;
//! # Ok::<(), tfidf_report::error::TfidfError>(())
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusLoader, LoadWarning, StopWordCase, load_stop_words};
use crate::error::Result;
use crate::report::Report;
use crate::stats::{DocumentStats, compute_corpus_stats};

fn default_parallel() -> bool {
    true
}

/// Everything a run needs to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory whose regular files form the corpus.
    pub input_dir: PathBuf,
    /// Report destination, overwritten if it exists.
    pub output_path: PathBuf,
    /// Stop word list, one `\r\n`-terminated entry per line.
    pub stop_words_path: PathBuf,
    #[serde(default)]
    pub stop_word_case: StopWordCase,
    /// Analyze and score documents on the rayon thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl PipelineConfig {
    pub fn new<I, O, S>(input_dir: I, output_path: O, stop_words_path: S) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
        S: Into<PathBuf>,
    {
        PipelineConfig {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            stop_words_path: stop_words_path.into(),
            stop_word_case: StopWordCase::default(),
            parallel: default_parallel(),
        }
    }

    pub fn with_stop_word_case(mut self, stop_word_case: StopWordCase) -> Self {
        self.stop_word_case = stop_word_case;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// The result of a run, before the report is written.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub report: Report,
    pub document_stats: Vec<DocumentStats>,
    /// Documents that made it into the corpus.
    pub corpus_size: usize,
    /// Everything that was skipped, in the order it happened.
    pub warnings: Vec<LoadWarning>,
}

#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load the corpus and compute its report.
    ///
    /// Unreadable inputs never fail the run; they show up in
    /// [`PipelineOutcome::warnings`].
    pub fn run(&self) -> Result<PipelineOutcome> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let (stop_words, warning) = load_stop_words(&self.config.stop_words_path);
        warnings.extend(warning);

        let loader = CorpusLoader::new(&stop_words, self.config.stop_word_case)?
            .parallel(self.config.parallel);
        let loaded = loader.load_dir(&self.config.input_dir);
        warnings.extend(loaded.warnings);

        let corpus = loaded.corpus;
        log::info!(
            "loaded {} documents from {}",
            corpus.len(),
            self.config.input_dir.display()
        );

        let document_stats = compute_corpus_stats(&corpus, self.config.parallel);
        let report = Report::from_document_stats(&document_stats);
        log::info!(
            "computed {} rows in {:.2?}",
            report.row_count(),
            start.elapsed()
        );

        Ok(PipelineOutcome {
            report,
            document_stats,
            corpus_size: corpus.len(),
            warnings,
        })
    }

    /// Write the report of `outcome` to the configured output path.
    pub fn write(&self, outcome: &PipelineOutcome) -> Result<()> {
        outcome.report.write_file(&self.config.output_path)?;
        log::info!("wrote report to {}", self.config.output_path.display());
        Ok(())
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_config_defaults() {
        let config = PipelineConfig::new("in", "out.csv", "stop.txt");
        assert_eq!(config.stop_word_case, StopWordCase::Sensitive);
        assert!(config.parallel);

        let config = config
            .with_stop_word_case(StopWordCase::Insensitive)
            .with_parallel(false);
        assert_eq!(config.stop_word_case, StopWordCase::Insensitive);
        assert!(!config.parallel);
    }

    #[test]
    fn test_run_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("docs");
        fs::create_dir(&input).unwrap();
        fs::write(input.join("doc1.txt"), "the cat dog cat").unwrap();
        fs::write(input.join("doc2.txt"), "dog bird").unwrap();
        fs::write(dir.path().join("stop.txt"), "the\r\n").unwrap();

        let pipeline = Pipeline::new(PipelineConfig::new(
            &input,
            dir.path().join("report.csv"),
            dir.path().join("stop.txt"),
        ));
        let outcome = pipeline.run().unwrap();
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.corpus_size, 2);
        assert_eq!(outcome.report.row_count(), 4);

        pipeline.write(&outcome).unwrap();
        let written = fs::read_to_string(pipeline.output_path()).unwrap();
        assert_eq!(written, outcome.report.render());
    }

    #[test]
    fn test_missing_inputs_only_warn() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = Pipeline::new(PipelineConfig::new(
            dir.path().join("missing"),
            dir.path().join("report.csv"),
            dir.path().join("missing.txt"),
        ));

        let outcome = pipeline.run().unwrap();
        assert_eq!(outcome.corpus_size, 0);
        assert_eq!(outcome.report.row_count(), 0);
        assert_eq!(outcome.warnings.len(), 2);
    }
}
