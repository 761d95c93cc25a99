//! The benchmark harness: chunked parallel dispatch and wall-clock timing.

use anyhow::Result;
use std::time::Instant;

use crate::config::BenchConfig;
use crate::parallel::{Chunk, ParallelExecutor, partition};
use crate::primes::scan_range;
use crate::report::BenchReport;

/// Find every prime in `[range_start, range_end]` by scanning one chunk per
/// pool worker and splicing the per-chunk results back together in chunk
/// order, which keeps the final sequence ascending.
pub fn find_primes_parallel(range_start: u64, range_end: u64, workers: usize) -> Result<Vec<u64>> {
    scan_chunks(partition(range_start, range_end, workers))
}

fn scan_chunks(chunks: Vec<Chunk>) -> Result<Vec<u64>> {
    let pool = ParallelExecutor::new(chunks.len());
    let per_chunk = pool.execute(chunks, |chunk, worker_id| {
        tracing::trace!("worker {worker_id} scanning {} to {}", chunk.start, chunk.end);
        scan_range(chunk.start, chunk.end)
    })?;
    Ok(per_chunk.into_iter().flatten().collect())
}

/// Time the sequential scan and the parallel dispatch over the configured
/// range and assemble the run's report.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let chunks = partition(config.range_start, config.range_end, config.workers);
    let worker_count = chunks.len();
    let cores = num_cpus::get();
    if worker_count > cores {
        tracing::debug!("{worker_count} workers oversubscribe {cores} available cores");
    }

    tracing::info!(
        "sequential scan of {} to {}",
        config.range_start,
        config.range_end
    );
    let started = Instant::now();
    let sequential = scan_range(config.range_start, config.range_end);
    let single_thread_time = started.elapsed().as_secs_f64();

    tracing::info!("parallel scan on {worker_count} workers");
    let started = Instant::now();
    let parallel = scan_chunks(chunks)?;
    let multi_thread_time = started.elapsed().as_secs_f64();

    debug_assert_eq!(sequential.len(), parallel.len());
    Ok(BenchReport::new(
        config,
        worker_count,
        sequential.len(),
        single_thread_time,
        multi_thread_time,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BenchConfig, IntWidth, OutputFormat};
    use std::path::PathBuf;

    fn config(range_start: u64, range_end: u64, workers: usize) -> BenchConfig {
        BenchConfig {
            range_start,
            range_end,
            workers,
            width: IntWidth::W64,
            format: OutputFormat::Text,
            output: PathBuf::from("rust_results.json"),
        }
    }

    #[test]
    fn parallel_matches_sequential_for_many_worker_counts() {
        let expected = scan_range(1, 200);
        for workers in [1, 2, 3, 4, 7, 16, 64] {
            let found = find_primes_parallel(1, 200, workers).unwrap();
            assert_eq!(found, expected, "divergence with {workers} workers");
        }
    }

    #[test]
    fn four_workers_over_first_hundred() {
        let primes = find_primes_parallel(1, 100, 4).unwrap();
        assert_eq!(primes.len(), 25);
        assert_eq!(&primes[..5], &[2, 3, 5, 7, 11]);
        assert_eq!(&primes[23..], &[89, 97]);
    }

    #[test]
    fn one_worker_over_first_ten() {
        let primes = find_primes_parallel(1, 10, 1).unwrap();
        assert_eq!(primes, vec![2, 3, 5, 7]);
        assert_eq!(primes, scan_range(1, 10));
    }

    #[test]
    fn run_produces_consistent_report() {
        let report = run(&config(1, 1000, 4)).unwrap();
        assert_eq!(report.primes_found, 168);
        assert_eq!(report.range, [1, 1000]);
        assert_eq!(report.workers, 4);
        assert!(report.single_thread_time >= 0.0);
        assert!(report.multi_thread_time >= 0.0);
        assert!(report.speedup.is_finite() && report.speedup >= 0.0);
    }

    #[test]
    fn run_clamps_workers_on_tiny_range() {
        let report = run(&config(1, 4, 64)).unwrap();
        assert_eq!(report.primes_found, 2); // 2 and 3
        assert_eq!(report.workers, 3); // span of 3, clamped from 64
    }
}
