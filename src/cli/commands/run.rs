//! The benchmark command: configure, run, report.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::bench;
use crate::config::{BenchConfig, IntWidth, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Lower bound of the scanned range (inclusive)
    #[arg(long, default_value_t = 1)]
    pub range_start: u64,

    /// Upper bound of the scanned range (inclusive)
    #[arg(long, default_value_t = 10_000_000)]
    pub range_end: u64,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value_t = 4)]
    pub workers: usize,

    /// Integer width profile
    #[arg(long, value_enum, default_value = "64")]
    pub width: IntWidth,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Result file path (used with --format json)
    #[arg(long, default_value = "rust_results.json")]
    pub output: PathBuf,
}

/// The stock parameters used when no subcommand is given.
impl Default for RunArgs {
    fn default() -> Self {
        Self {
            range_start: 1,
            range_end: 10_000_000,
            workers: 4,
            width: IntWidth::W64,
            format: OutputFormat::Text,
            output: PathBuf::from("rust_results.json"),
        }
    }
}

pub fn execute(args: RunArgs) -> Result<()> {
    let config = BenchConfig::from_cli_args(&args)?;
    let report = bench::run(&config)?;

    if let OutputFormat::Json = config.format {
        // A failed write degrades to a warning; the computed numbers below
        // are still reported.
        if let Err(err) = report.write_json(&config.output) {
            tracing::warn!("could not write result file: {err:#}");
        }
    }
    report.print_console();

    Ok(())
}
