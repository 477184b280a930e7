//! First pass: build the master header from every input file's first line

use crate::columns::{collapse_tab_runs, MasterHeader};
use crate::error::Result;
use crate::output::OutputTable;
use crate::reader::SummaryFile;
use crate::report::{Pass, Reporter};
use crate::scanner::scan_directory;
use std::path::{Path, PathBuf};

/// Read the column names declared on the first line of one input file
///
/// Runs of tabs count as a single separator here.
pub fn read_header_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut file = SummaryFile::open(path)?;
    let header = file.read_header()?;
    Ok(collapse_tab_runs(header.fields.iter().map(String::as_str)))
}

/// Collect the master header from a sequence of input paths
pub fn collect_master_header<I>(paths: I, reporter: &dyn Reporter) -> Result<(MasterHeader, usize)>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut names: Vec<String> = Vec::new();
    let mut files = 0;

    for path in paths {
        let path = path?;
        names.extend(read_header_names(&path)?);
        reporter.file_read(Pass::Header, &path);
        files += 1;
    }

    Ok((MasterHeader::from_names(names), files))
}

/// Unify the headers of every matching file under `input_dir` and write the
/// result as the only line of a freshly truncated `output_file`
pub fn unify_header(
    input_dir: &Path,
    pattern: &str,
    output_file: &Path,
    reporter: &dyn Reporter,
) -> Result<MasterHeader> {
    reporter.pass_started(Pass::Header);

    let mut output = OutputTable::create(output_file)?;
    let (header, files) = collect_master_header(scan_directory(input_dir, pattern)?, reporter)?;

    output.write_record(header.columns())?;
    output.finish()?;

    reporter.pass_finished(Pass::Header, files);
    Ok(header)
}
