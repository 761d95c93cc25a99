//! # Primebench - sequential vs multi-threaded prime counting
//!
//! Primebench counts the primes in a numeric range twice - once with a
//! single sequential scan, once partitioned across a fixed-size worker
//! pool - and reports both wall-clock times and the resulting speedup.
//!
//! ## Usage
//!
//! ```bash
//! # Stock parameters: range 1..=10_000_000, 4 workers, console output
//! primebench
//!
//! # Custom range and pool size
//! primebench run --range-end 1000000 -j 8
//!
//! # Write the machine-readable record next to the console summary
//! primebench run --format json --output rust_results.json
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use primebench::bench::find_primes_parallel;
//! use primebench::primes::scan_range;
//!
//! let sequential = scan_range(1, 100_000);
//! let parallel = find_primes_parallel(1, 100_000, 4)?;
//! assert_eq!(sequential, parallel);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bench;
pub mod cli;
pub mod config;
pub mod parallel;
pub mod primes;
pub mod report;
