//! The benchmark record and its two output sinks.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::BenchConfig;

/// Floor applied to the measured parallel duration before the speedup
/// division; a trivial range can finish inside the clock's resolution and
/// the ratio must stay finite.
const MIN_MEASURABLE_SECS: f64 = 1e-9;

/// One benchmark run, immutable after construction.
///
/// The serialized field order is the exact shape of the `*_results.json`
/// files consumed by the comparison tooling; do not reorder.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub language: String,
    pub range: [u64; 2],
    pub primes_found: usize,
    pub single_thread_time: f64,
    pub multi_thread_time: f64,
    pub speedup: f64,
    #[serde(skip)]
    pub workers: usize,
}

impl BenchReport {
    pub fn new(
        config: &BenchConfig,
        workers: usize,
        primes_found: usize,
        single_thread_time: f64,
        multi_thread_time: f64,
    ) -> Self {
        let speedup = single_thread_time / multi_thread_time.max(MIN_MEASURABLE_SECS);
        Self {
            language: "Rust".to_string(),
            range: [config.range_start, config.range_end],
            primes_found,
            single_thread_time,
            multi_thread_time,
            speedup,
            workers,
        }
    }

    /// Human-readable summary: durations to 4 decimal places, speedup to 2.
    pub fn print_console(&self) {
        println!();
        println!("Rust Benchmark Results:");
        println!("Range: {} to {}", self.range[0], self.range[1]);
        println!("Number of primes found: {}", self.primes_found);
        println!(
            "Single-threaded time: {:.4} seconds",
            self.single_thread_time
        );
        println!(
            "Multi-threaded time ({} threads): {:.4} seconds",
            self.workers, self.multi_thread_time
        );
        println!("Speedup: {:.2}x", self.speedup);
    }

    /// Write the record as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("writing result file {}", path.display()))?;
        tracing::info!("wrote result file {}", path.display());
        Ok(())
    }
}
