//! sumcat CLI
//!
//! Concatenates every `summary_agent.*` table under a directory into one
//! tab-separated file with a unified header.

use clap::Parser;
use std::path::PathBuf;
use sumcat_core::{merge, MergeConfig, TracingReporter};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "sumcat")]
#[command(about = "Merge per-run summary tables into one consolidated table", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory tree holding the run directories
    input_dir: PathBuf,

    /// Output table (overwritten)
    output_file: PathBuf,
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> sumcat_core::Result<()> {
    let config = MergeConfig::new(cli.input_dir, cli.output_file);

    let summary = merge(&config, &TracingReporter)?;

    println!(
        "Wrote {} rows from {} files ({} columns) to {}",
        summary.rows,
        summary.files,
        summary.columns,
        config.output_file.display()
    );

    Ok(())
}
