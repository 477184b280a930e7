//! Tab-separated output table writer

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Build a writer for the output format: tab-separated, unquoted, CRLF-terminated
pub(crate) fn tsv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::CRLF)
        .flexible(true)
        .from_writer(inner)
}

/// The consolidated output file, opened for one pass
pub struct OutputTable {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl OutputTable {
    /// Create or truncate the output file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| write_error(path, e))?;
        Ok(Self::new(path, file))
    }

    /// Open the output file for appending, creating it if needed
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| write_error(path, e))?;
        Ok(Self::new(path, file))
    }

    fn new(path: &Path, file: File) -> Self {
        Self {
            path: path.to_path_buf(),
            writer: tsv_writer(file),
        }
    }

    /// Write one line
    pub fn write_record<I, T>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(fields)
            .map_err(|e| write_error(&self.path, e.into()))
    }

    /// Flush buffered lines and release the file
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| write_error(&self.path, e))
    }
}

fn write_error(path: &Path, source: std::io::Error) -> Error {
    Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}
