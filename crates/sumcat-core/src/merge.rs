//! Two-pass merge of a directory of summary files into one table

use crate::error::Result;
use crate::header::unify_header;
use crate::projector::project_rows;
use crate::report::Reporter;
use crate::scanner::DEFAULT_PATTERN;
use std::path::PathBuf;

/// Settings for one merge run
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Root of the directory tree holding the run directories
    pub input_dir: PathBuf,
    /// Consolidated output table (truncated at the start of the run)
    pub output_file: PathBuf,
    /// Glob matched against input file names
    pub pattern: String,
}

impl MergeConfig {
    /// Create a config using the default `summary_agent.*` pattern
    pub fn new(input_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_file: output_file.into(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    /// Override the file name pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

/// Outcome of a completed merge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Input files whose rows were written
    pub files: usize,
    /// Data rows written
    pub rows: u64,
    /// Width of the master header
    pub columns: usize,
}

/// Run both passes: write the master header, then append all projected rows
///
/// The header pass finishes and releases the output file before the data
/// pass reopens it. Any error aborts the run; output already written is left
/// in place.
pub fn merge(config: &MergeConfig, reporter: &dyn Reporter) -> Result<MergeSummary> {
    let header = unify_header(
        &config.input_dir,
        &config.pattern,
        &config.output_file,
        reporter,
    )?;

    let stats = project_rows(
        &config.input_dir,
        &config.pattern,
        &config.output_file,
        &header,
        reporter,
    )?;

    Ok(MergeSummary {
        files: stats.files,
        rows: stats.rows,
        columns: header.len(),
    })
}
