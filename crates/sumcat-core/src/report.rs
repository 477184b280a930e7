//! Progress reporting for the two merge passes

use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// One of the two passes over the input tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Collect column names and write the master header
    Header,
    /// Project data rows into the master column order
    Data,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Header => write!(f, "1st pass: writing master header"),
            Pass::Data => write!(f, "2nd pass: writing data"),
        }
    }
}

/// Receives progress events; handed to each pass by the caller
pub trait Reporter {
    /// A pass is about to start
    fn pass_started(&self, pass: Pass);

    /// One input file was fully processed
    fn file_read(&self, _pass: Pass, _path: &Path) {}

    /// A pass completed after processing `files` input files
    fn pass_finished(&self, _pass: Pass, _files: usize) {}
}

/// Reporter that emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn pass_started(&self, pass: Pass) {
        info!("{}", pass);
    }

    fn file_read(&self, pass: Pass, path: &Path) {
        debug!(?pass, path = %path.display(), "read input file");
    }

    fn pass_finished(&self, pass: Pass, files: usize) {
        info!(?pass, files, "pass complete");
    }
}

/// Reporter that discards all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn pass_started(&self, _pass: Pass) {}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_messages() {
        assert_eq!(Pass::Header.to_string(), "1st pass: writing master header");
        assert_eq!(Pass::Data.to_string(), "2nd pass: writing data");
    }
}
