//! Command implementation for the tfidf-report CLI.

use crate::cli::args::TfidfArgs;
use crate::error::Result;
use crate::pipeline::Pipeline;

/// Execute a report run.
///
/// Skipped inputs and a failed report write are logged, not returned: the
/// only error left is a pipeline that cannot be built at all.
pub fn execute_command(args: TfidfArgs) -> Result<()> {
    let pipeline = Pipeline::new(args.to_config());
    log::debug!("running with {:?}", pipeline.config());

    let outcome = pipeline.run()?;

    let skipped = outcome
        .warnings
        .iter()
        .filter(|warning| warning.is_skipped_document())
        .count();
    if skipped > 0 {
        log::warn!("{skipped} documents skipped");
    }
    log::info!(
        "{} documents, {} rows",
        outcome.corpus_size,
        outcome.report.row_count()
    );

    if let Err(e) = pipeline.write(&outcome) {
        log::error!("{e}");
    }

    Ok(())
}
