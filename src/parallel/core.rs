use anyhow::Result;
use crossbeam::channel::{Receiver, Sender, bounded};
use std::sync::Arc;

/// Fixed-size worker pool over a queue of independent work items.
///
/// Items are fed to the pool through a bounded channel and processed with no
/// shared mutable state; each result is tagged with its item's submission
/// index so the output vector preserves input order regardless of which
/// worker finishes first. The pool lives inside a `crossbeam::thread::scope`,
/// so every thread is joined and released before `execute` returns, on the
/// failure path included.
pub struct ParallelExecutor {
    max_workers: usize,
    buffer_size: usize,
}

impl ParallelExecutor {
    pub fn new(max_workers: usize) -> Self {
        let max_workers = max_workers.max(1);
        Self {
            max_workers,
            buffer_size: max_workers * 2,
        }
    }

    /// Process every item on the pool and return the results in input order.
    ///
    /// A panic inside a worker is reported as an error after all remaining
    /// threads have been joined; partial results are abandoned.
    pub fn execute<T, R, F>(&self, work_items: Vec<T>, processor: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T, usize) -> R + Send + Sync,
    {
        if work_items.is_empty() {
            return Ok(Vec::new());
        }

        let actual_workers = std::cmp::min(self.max_workers, work_items.len());
        let total_items = work_items.len();
        let (work_tx, work_rx): (Sender<(usize, T)>, Receiver<(usize, T)>) =
            bounded(self.buffer_size);
        let (result_tx, result_rx): (Sender<(usize, R)>, Receiver<(usize, R)>) =
            bounded(self.buffer_size);

        let processor = Arc::new(processor);

        let slots = crossbeam::thread::scope(|s| {
            for worker_id in 0..actual_workers {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let processor = processor.clone();
                s.spawn(move |_| {
                    while let Ok((index, item)) = work_rx.recv() {
                        let result = processor(item, worker_id);
                        if result_tx.send((index, result)).is_err() {
                            break; // collector dropped
                        }
                    }
                });
            }

            let producer_tx = work_tx.clone();
            s.spawn(move |_| {
                for entry in work_items.into_iter().enumerate() {
                    if producer_tx.send(entry).is_err() {
                        break; // workers dropped
                    }
                }
            });

            // Close our ends of both channels: workers stop once the queue
            // drains, and if every worker dies early the producer's send
            // fails instead of blocking on a full buffer.
            drop(work_tx);
            drop(work_rx);
            drop(result_tx);

            let mut slots: Vec<Option<R>> = (0..total_items).map(|_| None).collect();
            while let Ok((index, result)) = result_rx.recv() {
                slots[index] = Some(result);
            }
            slots
        })
        .map_err(|_| anyhow::anyhow!("worker thread panicked during parallel execution"))?;

        slots
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| anyhow::anyhow!("worker failed before producing a result"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn processes_every_item() {
        let executor = ParallelExecutor::new(2);
        let results = executor
            .execute(vec![1, 2, 3, 4, 5], |x, _worker_id| x * 2)
            .unwrap();
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn preserves_submission_order_under_skewed_completion() {
        // Early items sleep longest, so completion order inverts submission
        // order; the output must still match the input.
        let items: Vec<u64> = (0..8).collect();
        let executor = ParallelExecutor::new(4);
        let results = executor
            .execute(items.clone(), |x, _worker_id| {
                std::thread::sleep(Duration::from_millis((8 - x) * 3));
                x
            })
            .unwrap();
        assert_eq!(results, items);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let executor = ParallelExecutor::new(4);
        let results: Vec<i32> = executor.execute(Vec::<i32>::new(), |x, _| x).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn more_workers_than_items() {
        let executor = ParallelExecutor::new(16);
        let results = executor.execute(vec![10, 20], |x, _| x + 1).unwrap();
        assert_eq!(results, vec![11, 21]);
    }

    #[test]
    fn worker_panic_surfaces_as_error() {
        let executor = ParallelExecutor::new(2);
        let result = executor.execute(vec![1, 2, 3, 4], |x, _worker_id| {
            if x == 3 {
                panic!("boom");
            }
            x
        });
        assert!(result.is_err());
    }
}
