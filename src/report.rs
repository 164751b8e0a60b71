//! CSV report rendering.
//!
//! A report is a header line followed by one row per document and distinct
//! term:
//!
//! ```text
//! ,Term,F,DF, IDF,TF,F X IDF,TF X IDF
//! /abs/path/doc1.txt,cat,2,1,0.3010299956639812,1.3010299956639813,0.6020599913279624,0.3916490612339099
//! ```
//!
//! Fields are not quoted. Terms only ever contain ASCII letters, so they can
//! never contain the separator.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TfidfError};
use crate::stats::{DocumentStats, TermStats};

/// First line of every report.
pub const HEADER: &str = ",Term,F,DF, IDF,TF,F X IDF,TF X IDF";

/// Separator between the fields of a row.
pub const FIELD_SEPARATOR: char = ',';

/// Shortest decimal representation that reads back as the same value,
/// always with a fractional part (`0.0`, `1.0`, `0.3010299956639812`).
///
/// Magnitudes below `1e-4` switch to exponent notation (`4.3e-6`), as do
/// those of `1e16` and above.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Render the row of one term of the document at `path`.
pub fn format_row(path: &Path, stats: &TermStats) -> String {
    let fields = [
        path.display().to_string(),
        stats.term.clone(),
        stats.term_frequency.to_string(),
        stats.document_frequency.to_string(),
        format_float(stats.inverse_document_frequency),
        format_float(stats.normalized_term_frequency),
        format_float(stats.raw_f_idf),
        format_float(stats.tf_idf),
    ];
    fields.join(&FIELD_SEPARATOR.to_string())
}

/// The rendered lines of a report, header first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// A report with the header line only.
    pub fn empty() -> Self {
        Report {
            lines: vec![HEADER.to_string()],
        }
    }

    /// Render documents in the given order, terms in their stored order.
    pub fn from_document_stats(documents: &[DocumentStats]) -> Self {
        let mut report = Report::empty();
        for document in documents {
            report.lines.extend(
                document
                    .terms
                    .iter()
                    .map(|stats| format_row(&document.path, stats)),
            );
        }
        report
    }

    /// Every line, header included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Data rows without the header.
    pub fn rows(&self) -> &[String] {
        &self.lines[1..]
    }

    pub fn row_count(&self) -> usize {
        self.lines.len() - 1
    }

    /// The report text, every line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            TfidfError::report(format!("cannot create {}: {e}", path.display()))
        })?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .map_err(|e| TfidfError::report(format!("cannot write {}: {e}", path.display())))
    }
}

impl Default for Report {
    fn default() -> Self {
        Report::empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
