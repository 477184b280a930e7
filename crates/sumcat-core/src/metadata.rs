//! Run metadata derived from an input file's path
//!
//! Summary files live in run directories named like
//! `<prefix>.<n>.<age>.<iteration>.control` or
//! `<prefix>.<n>.<age>.<iteration>.<kind>.<intervention>`, and are themselves
//! named `summary_agent.<n>.<replication>...`.

use crate::error::{Error, Result};
use std::path::Path;

/// Intervention value written for control runs
pub const NO_INTERVENTION: &str = "-1";

const CONTROL: &str = "control";

/// The four metadata values for every row of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub age: String,
    pub intervention: String,
    pub iteration: String,
    pub replication: String,
}

impl RunMetadata {
    /// Derive metadata from the parent directory name and the file name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let run_dir = path
            .parent()
            .and_then(Path::file_name)
            .ok_or_else(|| Error::path_format(path, "no parent directory"))?;
        let run_dir = run_dir
            .to_str()
            .ok_or_else(|| Error::path_format(path, "run directory name is not UTF-8"))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::path_format(path, "file name missing or not UTF-8"))?;

        let scenario: Vec<&str> = run_dir.split('.').collect();
        if scenario.len() < 5 {
            return Err(Error::path_format(
                path,
                format!(
                    "run directory '{}' has {} dot-separated fields, expected at least 5",
                    run_dir,
                    scenario.len()
                ),
            ));
        }

        let parts: Vec<&str> = file_name.split('.').collect();
        if parts.len() < 3 {
            return Err(Error::path_format(
                path,
                format!(
                    "file name '{}' has {} dot-separated fields, expected at least 3",
                    file_name,
                    parts.len()
                ),
            ));
        }

        // Intervention runs carry one extra field before the intervention value
        let intervention = if scenario.len() > 5 {
            scenario[5]
        } else {
            scenario[4]
        };
        let intervention = if intervention == CONTROL {
            NO_INTERVENTION
        } else {
            intervention
        };

        Ok(Self {
            age: scenario[2].to_string(),
            intervention: intervention.to_string(),
            iteration: scenario[3].to_string(),
            replication: parts[2].to_string(),
        })
    }

    /// Values in output column order
    pub fn fields(&self) -> [&str; 4] {
        [
            self.age.as_str(),
            self.intervention.as_str(),
            self.iteration.as_str(),
            self.replication.as_str(),
        ]
    }
}
