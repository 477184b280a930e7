//! Second pass: re-project every data row into the master column order

use crate::columns::{strip_line_breaks, MasterHeader};
use crate::error::{Error, Result};
use crate::metadata::RunMetadata;
use crate::output::OutputTable;
use crate::reader::SummaryFile;
use crate::report::{Pass, Reporter};
use crate::scanner::scan_directory;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Counts from a completed data pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionStats {
    /// Input files projected
    pub files: usize,
    /// Data rows written
    pub rows: u64,
}

/// Align one row's values with the data columns of the master header
///
/// `current` is the file's own header; `values` is positionally aligned with
/// it. Master columns the file does not declare come back as empty strings.
/// When a file repeats a column name, its last value wins.
pub fn align_row<'r>(
    master: &MasterHeader,
    current: &[String],
    values: &'r [String],
) -> Vec<&'r str> {
    let given: HashMap<&str, &'r str> = current
        .iter()
        .map(String::as_str)
        .zip(values.iter().map(String::as_str))
        .collect();

    master
        .data_columns()
        .iter()
        .map(|name| given.get(name.as_str()).copied().unwrap_or(""))
        .collect()
}

/// Append every data row of one input file to `output`, returning the row count
pub fn project_file(path: &Path, master: &MasterHeader, output: &mut OutputTable) -> Result<u64> {
    let mut input = SummaryFile::open(path)?;

    let current: Vec<String> = input
        .read_header()?
        .fields
        .iter()
        .map(|name| strip_line_breaks(name))
        .collect();
    let metadata = RunMetadata::from_path(path)?;

    let mut rows = 0;
    while let Some(row) = input.next_row()? {
        // A blank line is one empty field, valid only for single-column files
        if row.fields.len() != current.len() {
            return Err(Error::RaggedRow {
                path: path.to_path_buf(),
                line: row.line,
                expected: current.len(),
                found: row.fields.len(),
            });
        }

        let aligned = align_row(master, &current, &row.fields);

        // The trailing empty field leaves a tab before the line terminator
        output.write_record(
            metadata
                .fields()
                .into_iter()
                .chain(aligned)
                .chain(std::iter::once("")),
        )?;
        rows += 1;
    }

    Ok(rows)
}

/// Project rows from a sequence of input paths into `output`
pub fn project_paths<I>(
    paths: I,
    master: &MasterHeader,
    output: &mut OutputTable,
    reporter: &dyn Reporter,
) -> Result<ProjectionStats>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut stats = ProjectionStats::default();

    for path in paths {
        let path = path?;
        stats.rows += project_file(&path, master, output)?;
        stats.files += 1;
        reporter.file_read(Pass::Data, &path);
    }

    Ok(stats)
}

/// Append the data rows of every matching file under `input_dir` to `output_file`
pub fn project_rows(
    input_dir: &Path,
    pattern: &str,
    output_file: &Path,
    master: &MasterHeader,
    reporter: &dyn Reporter,
) -> Result<ProjectionStats> {
    reporter.pass_started(Pass::Data);

    let mut output = OutputTable::append(output_file)?;
    let stats = project_paths(scan_directory(input_dir, pattern)?, master, &mut output, reporter)?;
    output.finish()?;

    reporter.pass_finished(Pass::Data, stats.files);
    Ok(stats)
}
