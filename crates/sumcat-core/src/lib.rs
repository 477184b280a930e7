//! sumcat-core: Core library for concatenating per-run summary tables
//!
//! This library provides functionality to:
//! - Scan a directory tree for tab-separated summary files
//! - Unify their headers into one ordered master header (first pass)
//! - Re-project every data row into the master column order (second pass)
//! - Derive age/intervention/iteration/replication columns from each file's path

pub mod columns;
pub mod error;
pub mod header;
pub mod merge;
pub mod metadata;
pub mod output;
pub mod projector;
pub mod reader;
pub mod report;
pub mod scanner;

pub use columns::{dedup_preserving_order, strings_with_prefix, MasterHeader, METADATA_COLUMNS};
pub use error::{Error, Result};
pub use header::unify_header;
pub use merge::{merge, MergeConfig, MergeSummary};
pub use metadata::RunMetadata;
pub use projector::{align_row, project_rows, ProjectionStats};
pub use report::{NullReporter, Pass, Reporter, TracingReporter};
pub use scanner::{scan_directory, DEFAULT_PATTERN};
