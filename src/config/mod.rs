//! Benchmark configuration, decoupled from the CLI entry point.
//!
//! Integer width and output sink are configuration profiles, not separate
//! programs: [`IntWidth`] constrains the accepted range, [`OutputFormat`]
//! picks the sink.

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::cli::commands::run::RunArgs;

/// Integer width profile.
///
/// Scanning always runs over `u64`; the 32-bit profile only constrains the
/// accepted range bounds, it does not change the scanning code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IntWidth {
    /// Range bounds must fit in 32 bits
    #[value(name = "32")]
    W32,
    /// Full 64-bit range
    #[value(name = "64")]
    W64,
}

/// Output sink profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Console summary only
    Text,
    /// JSON result file plus the console summary
    Json,
}

/// Validated benchmark parameters, passed into the harness.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub range_start: u64,
    pub range_end: u64,
    pub workers: usize,
    pub width: IntWidth,
    pub format: OutputFormat,
    pub output: PathBuf,
}

impl BenchConfig {
    pub fn from_cli_args(args: &RunArgs) -> Result<Self> {
        let config = Self {
            range_start: args.range_start,
            range_end: args.range_end,
            workers: args.workers,
            width: args.width,
            format: args.format,
            output: args.output.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.range_start > self.range_end {
            bail!(
                "range start {} exceeds range end {}",
                self.range_start,
                self.range_end
            );
        }
        if self.workers == 0 {
            bail!("worker count must be at least 1");
        }
        if self.width == IntWidth::W32 && self.range_end > u64::from(u32::MAX) {
            bail!(
                "range end {} does not fit the 32-bit profile (max {})",
                self.range_end,
                u32::MAX
            );
        }
        Ok(())
    }
}
