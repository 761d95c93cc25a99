//! Range partitioning for the worker pool.

/// A contiguous inclusive sub-range assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: u64,
    pub end: u64,
}

/// Split the inclusive range `[range_start, range_end]` into one chunk per
/// worker.
///
/// Chunk size is the floor of `(range_end - range_start) / workers`; worker
/// `i` gets the chunk starting at `range_start + i * size`, every chunk but
/// the last ends `size - 1` later, and the last runs to `range_end`,
/// absorbing the division remainder. The produced chunks always partition
/// the range exactly: no gaps, no overlaps.
///
/// The floor-division formula yields empty chunks once the worker count
/// outgrows the range span, so the count is clamped to `max(1, span)`;
/// callers that care about the actual pool size read it off the returned
/// vector's length.
pub fn partition(range_start: u64, range_end: u64, workers: usize) -> Vec<Chunk> {
    debug_assert!(range_start <= range_end, "inverted range");

    let span = range_end - range_start;
    let requested = workers.max(1) as u64;
    let workers = requested.min(span.max(1));
    if workers < requested {
        tracing::debug!("clamped worker count {requested} to {workers} for range span {span}");
    }

    let chunk_size = span / workers;
    (0..workers)
        .map(|i| {
            let start = range_start + i * chunk_size;
            let end = if i == workers - 1 {
                range_end
            } else {
                start + chunk_size - 1
            };
            Chunk { start, end }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chunks must tile the range exactly, in order.
    fn assert_exact_partition(chunks: &[Chunk], start: u64, end: u64) {
        assert!(!chunks.is_empty());
        assert_eq!(chunks.first().unwrap().start, start);
        assert_eq!(chunks.last().unwrap().end, end);
        for chunk in chunks {
            assert!(chunk.start <= chunk.end, "empty chunk {chunk:?}");
        }
        for pair in chunks.windows(2) {
            assert_eq!(pair[1].start, pair[0].end + 1, "gap or overlap");
        }
    }

    #[test]
    fn single_worker_takes_whole_range() {
        assert_eq!(partition(1, 10, 1), vec![Chunk { start: 1, end: 10 }]);
    }

    #[test]
    fn last_chunk_absorbs_remainder() {
        let chunks = partition(1, 10, 3);
        assert_eq!(
            chunks,
            vec![
                Chunk { start: 1, end: 3 },
                Chunk { start: 4, end: 6 },
                Chunk { start: 7, end: 10 },
            ]
        );
    }

    #[test]
    fn exact_partition_for_every_worker_count() {
        for workers in 1..=100 {
            let chunks = partition(1, 100, workers);
            assert_exact_partition(&chunks, 1, 100);
        }
    }

    #[test]
    fn worker_count_is_clamped_to_span() {
        // span of [1, 4] is 3; more workers would create empty chunks
        let chunks = partition(1, 4, 64);
        assert_eq!(chunks.len(), 3);
        assert_exact_partition(&chunks, 1, 4);
    }

    #[test]
    fn single_element_range() {
        let chunks = partition(5, 5, 8);
        assert_eq!(chunks, vec![Chunk { start: 5, end: 5 }]);
    }
}
