//! Reader for tab-separated summary files

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One line of an input file, split on single tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number
    pub line: u64,
    pub fields: Vec<String>,
}

/// An open input file
///
/// Lines may end in `\r`, `\n` or `\r\n`. Blank lines are kept: each one
/// reads as a row holding a single empty field. The handle is released when
/// this value is dropped, on every exit path.
pub struct SummaryFile {
    path: PathBuf,
    reader: BufReader<File>,
    pending: VecDeque<String>,
    line: u64,
}

impl SummaryFile {
    /// Open an input file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::InputOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            pending: VecDeque::new(),
            line: 0,
        })
    }

    /// Read the header line, split on single tabs
    ///
    /// Must be called before [`SummaryFile::next_row`].
    pub fn read_header(&mut self) -> Result<Row> {
        self.next_row()?.ok_or_else(|| Error::MissingHeader {
            path: self.path.clone(),
        })
    }

    /// Read the next line, or `None` at end of file
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        if self.pending.is_empty() {
            self.fill().map_err(|e| Error::InputRead {
                path: self.path.clone(),
                source: e,
            })?;
        }

        Ok(self.pending.pop_front().map(|text| {
            self.line += 1;
            Row {
                line: self.line,
                fields: text.split('\t').map(str::to_string).collect(),
            }
        }))
    }

    /// Queue the lines of the next `\n`-terminated chunk, splitting on lone `\r`
    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = Vec::new();
        if self.reader.read_until(b'\n', &mut chunk)? == 0 {
            return Ok(());
        }

        let chunk =
            String::from_utf8(chunk).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let text = chunk.strip_suffix('\n').unwrap_or(chunk.as_str());
        let text = text.strip_suffix('\r').unwrap_or(text);

        self.pending.extend(text.split('\r').map(str::to_string));
        Ok(())
    }
}
