//! Directory scanner for discovering summary files

use crate::error::{Error, Result};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File name pattern for per-run summary tables
pub const DEFAULT_PATTERN: &str = "summary_agent.*";

/// Lazy, recursive listing of files whose base name matches a glob
///
/// Each pass builds a fresh one; a listing cannot be restarted.
pub struct MatchingFiles {
    walker: walkdir::IntoIter,
    pattern: Pattern,
}

impl Iterator for MatchingFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.walker.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::WalkDir(e))),
            };

            if !self
                .pattern
                .matches(&entry.file_name().to_string_lossy())
            {
                continue;
            }

            match is_regular_file(&entry) {
                Ok(true) => return Some(Ok(entry.into_path())),
                Ok(false) => continue,
                Err(e) => return Some(Err(e)),
            }
        }

        None
    }
}

/// Regular files, and symlinks whose target is a regular file
fn is_regular_file(entry: &DirEntry) -> Result<bool> {
    if !entry.path_is_symlink() {
        return Ok(entry.file_type().is_file());
    }

    let metadata = fs::metadata(entry.path()).map_err(|e| Error::InputOpen {
        path: entry.path().to_path_buf(),
        source: e,
    })?;
    Ok(metadata.is_file())
}

/// Walk `root` recursively, yielding every regular file whose name matches `pattern`
///
/// Entries are visited in file-name order within each directory.
pub fn scan_directory<P: AsRef<Path>>(root: P, pattern: &str) -> Result<MatchingFiles> {
    let pattern = Pattern::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    let walker = WalkDir::new(root.as_ref())
        .sort_by_file_name()
        .into_iter();

    Ok(MatchingFiles { walker, pattern })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_finds_nested_matches_only() {
        let dir = tempdir().unwrap();
        let run = dir.path().join("run.1.3.2.control");
        fs::create_dir_all(run.join("deeper")).unwrap();
        fs::write(run.join("summary_agent.0.1"), "a\n").unwrap();
        fs::write(run.join("deeper").join("summary_agent.0.2.txt"), "a\n").unwrap();
        fs::write(run.join("agent_summary.0.3"), "a\n").unwrap();
        fs::write(run.join("summary_agent"), "a\n").unwrap();

        let found: Vec<PathBuf> = scan_directory(dir.path(), DEFAULT_PATTERN)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            found,
            vec![
                run.join("deeper").join("summary_agent.0.2.txt"),
                run.join("summary_agent.0.1"),
            ]
        );
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("summary_agent.dir")).unwrap();

        let found: Vec<PathBuf> = scan_directory(dir.path(), DEFAULT_PATTERN)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_skipped() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("elsewhere");
        fs::create_dir_all(&target).unwrap();
        let run = dir.path().join("run.1.3.2.control");
        fs::create_dir_all(&run).unwrap();
        fs::write(run.join("summary_agent.0.1"), "a\n").unwrap();
        symlink(&target, run.join("summary_agent.link")).unwrap();

        let found: Vec<PathBuf> = scan_directory(dir.path(), DEFAULT_PATTERN)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(found, vec![run.join("summary_agent.0.1")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_yielded() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("data.tsv");
        fs::write(&target, "a\n").unwrap();
        let run = dir.path().join("run.1.3.2.control");
        fs::create_dir_all(&run).unwrap();
        symlink(&target, run.join("summary_agent.0.1")).unwrap();

        let found: Vec<PathBuf> = scan_directory(dir.path(), DEFAULT_PATTERN)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(found, vec![run.join("summary_agent.0.1")]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let mut files = scan_directory(dir.path().join("absent"), DEFAULT_PATTERN).unwrap();
        assert!(matches!(files.next(), Some(Err(Error::WalkDir(_)))));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = scan_directory(".", "summary_[agent");
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }
}
