//! Command line argument parsing for the tfidf-report CLI using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::corpus::StopWordCase;
use crate::pipeline::PipelineConfig;

/// tfidf-report - per-document TF, DF, IDF and TF-IDF statistics as CSV
#[derive(Parser, Debug, Clone)]
#[command(name = "tfidf-report")]
#[command(about = "Write per-document TF, DF, IDF and TF-IDF statistics of a directory as CSV")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TfidfArgs {
    /// Directory whose files form the corpus (not searched recursively)
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// CSV report to write, overwritten if it exists
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Stop word list, one CRLF-terminated entry per line
    #[arg(value_name = "STOPWORD_FILE")]
    pub stopword_file: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Match stop words regardless of case
    #[arg(long)]
    pub ignore_stopword_case: bool,

    /// Process documents on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl TfidfArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Build the run configuration from the parsed arguments.
    pub fn to_config(&self) -> PipelineConfig {
        let stop_word_case = if self.ignore_stopword_case {
            StopWordCase::Insensitive
        } else {
            StopWordCase::Sensitive
        };

        PipelineConfig::new(&self.input_dir, &self.output_file, &self.stopword_file)
            .with_stop_word_case(stop_word_case)
            .with_parallel(!self.sequential)
    }
}
