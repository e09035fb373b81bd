// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Batched Spacing Solver
//!
//! Answers many placement counts for one position set. The positions are
//! validated and sorted once; the queries are then split into contiguous
//! chunks and solved on worker threads spawned with `std::thread::scope`,
//! all sharing the same immutable `SortedPositionSet` by reference.
//!
//! ## Highlights
//!
//! - Every query is validated on its own. A zero or oversized count yields an
//!   `InputError` in its slot without affecting the other queries.
//! - Results come back in query order regardless of the thread count.
//! - Each worker owns its `SpacingSearch` and monitor stack; nothing mutable is
//!   shared between threads.
//! - Builder pattern: `BatchSolverBuilder` configures the thread count and
//!   whether per-query searches report through the `log` facade.
//!
//! ## Usage
//!
//! ```rust
//! use picket_model::positions::PositionSet;
//! use picket_solver::solver::BatchSolverBuilder;
//!
//! let positions = PositionSet::new(vec![1i64, 2, 4, 8, 9]).unwrap();
//! let solver = BatchSolverBuilder::new().with_threads(2).build();
//! let outcome = solver.solve(&positions, &[1, 3, 5, 6]);
//!
//! let distances: Vec<_> = outcome.distances().collect();
//! assert_eq!(distances[0], Ok(8));
//! assert_eq!(distances[1], Ok(3));
//! assert_eq!(distances[2], Ok(1));
//! assert!(distances[3].is_err());
//! ```

use crate::result::{BatchOutcome, BatchStatistics};
use log::debug;
use picket_model::{
    error::InputError,
    positions::{PlacementCount, PositionSet, SortedPositionSet},
};
use picket_search::{
    monitor::log::LogMonitor, num::SpacingNumeric, result::SearchOutcome,
    search::SpacingSearchBuilder,
};
use std::{marker::PhantomData, num::NonZeroUsize};

const LOG_TARGET: &str = "picket_solver";

/// Solves batches of placement counts over a shared position set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSolver<T> {
    num_threads: usize,
    logging: bool,
    _phantom: PhantomData<T>,
}

impl<T> BatchSolver<T>
where
    T: SpacingNumeric,
{
    /// Returns the maximum number of worker threads.
    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Returns `true` if per-query searches emit `log` records.
    #[inline]
    pub fn logging(&self) -> bool {
        self.logging
    }

    /// Validates `positions` and solves every count in `counts`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyInput` or `InputError::SpanOverflow` if the
    /// positions themselves are invalid. Invalid counts are reported per query
    /// inside the returned outcome.
    pub fn solve_slice(&self, positions: &[T], counts: &[usize]) -> Result<BatchOutcome<T>, InputError> {
        let set = PositionSet::from_slice(positions)?;
        Ok(self.solve(&set, counts))
    }

    /// Solves every count in `counts` for `positions`.
    ///
    /// The result at index `i` answers `counts[i]`.
    pub fn solve(&self, positions: &PositionSet<T>, counts: &[usize]) -> BatchOutcome<T> {
        let start_time = std::time::Instant::now();
        let sorted = positions.sorted();

        let (results, used_threads) = self.run_queries_parallel(&sorted, counts);

        let failed_queries = results.iter().filter(|r| r.is_err()).count();
        let statistics = BatchStatistics {
            queries: counts.len(),
            failed_queries,
            used_threads,
            solve_duration: start_time.elapsed(),
        };
        debug!(
            target: LOG_TARGET,
            "batch finished: {} queries ({} failed) on {} threads in {:.3}s",
            statistics.queries,
            statistics.failed_queries,
            statistics.used_threads,
            statistics.solve_duration.as_secs_f64()
        );

        BatchOutcome::new(results, statistics)
    }

    /// Spawns the workers and collects their results in query order.
    fn run_queries_parallel(
        &self,
        sorted: &SortedPositionSet<T>,
        counts: &[usize],
    ) -> (Vec<Result<SearchOutcome<T>, InputError>>, usize) {
        if counts.is_empty() {
            return (Vec::new(), 0);
        }

        let chunk_size = counts.len().div_ceil(self.num_threads.min(counts.len()));
        let logging = self.logging;
        let mut results = Vec::with_capacity(counts.len());
        let mut used_threads = 0;

        debug!(
            target: LOG_TARGET,
            "dispatching {} queries over {} positions in chunks of {}",
            counts.len(),
            sorted.len(),
            chunk_size
        );

        std::thread::scope(|scope| {
            let handles: Vec<_> = counts
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|&requested| Self::solve_query(sorted, requested, logging))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            used_threads = handles.len();

            for handle in handles {
                let chunk_results = handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
                results.extend(chunk_results);
            }
        });

        (results, used_threads)
    }

    fn solve_query(
        sorted: &SortedPositionSet<T>,
        requested: usize,
        logging: bool,
    ) -> Result<SearchOutcome<T>, InputError> {
        let count = PlacementCount::try_new(requested).ok_or(InputError::InvalidCount {
            requested,
            available: sorted.len(),
        })?;

        let mut builder = SpacingSearchBuilder::new();
        if logging {
            builder = builder.with_monitor(LogMonitor::new(LOG_TARGET).with_probe_logging(false));
        }
        builder.build().solve_sorted(sorted, count)
    }
}

/// Builder for `BatchSolver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSolverBuilder<T> {
    num_threads: Option<usize>,
    logging: bool,
    _phantom: PhantomData<T>,
}

impl<T> Default for BatchSolverBuilder<T>
where
    T: SpacingNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BatchSolverBuilder<T>
where
    T: SpacingNumeric,
{
    /// Creates a builder using all available cores and no logging.
    #[inline]
    pub fn new() -> Self {
        Self {
            num_threads: None,
            logging: false,
            _phantom: PhantomData,
        }
    }

    /// Sets the maximum number of worker threads.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads` is zero.
    #[inline]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        assert!(
            num_threads > 0,
            "called `BatchSolverBuilder::with_threads` with zero threads"
        );
        self.num_threads = Some(num_threads);
        self
    }

    /// Enables or disables `log` records for every query's search.
    #[inline]
    pub fn with_logging(mut self, yes: bool) -> Self {
        self.logging = yes;
        self
    }

    #[inline]
    pub fn build(self) -> BatchSolver<T> {
        let num_threads = self.num_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        });
        BatchSolver {
            num_threads,
            logging: self.logging,
            _phantom: PhantomData,
        }
    }
}
