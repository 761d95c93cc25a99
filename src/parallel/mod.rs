//! Generic parallel execution: range partitioning and a fixed-size,
//! order-preserving worker pool.

pub mod chunks;
pub mod core;

pub use chunks::{Chunk, partition};
pub use core::ParallelExecutor;
