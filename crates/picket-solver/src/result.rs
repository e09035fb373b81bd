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

use picket_model::error::InputError;
use picket_search::{num::SpacingNumeric, result::SearchOutcome};

/// Aggregated statistics of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Number of queried placement counts.
    pub queries: usize,
    /// Number of queries rejected with an `InputError`.
    pub failed_queries: usize,
    /// Number of worker threads actually spawned.
    pub used_threads: usize,
    /// Wall time of the whole batch, sorting included.
    pub solve_duration: std::time::Duration,
}

impl BatchStatistics {
    /// Number of queries that produced a distance.
    #[inline]
    pub fn solved_queries(&self) -> usize {
        self.queries - self.failed_queries
    }
}

impl std::fmt::Display for BatchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Batch Statistics:")?;
        writeln!(
            f,
            "  Queries: {} ({} solved, {} failed)",
            self.queries,
            self.solved_queries(),
            self.failed_queries
        )?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// The outcome of a batch: one result per query, in query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<T> {
    results: Vec<Result<SearchOutcome<T>, InputError>>,
    statistics: BatchStatistics,
}

impl<T> BatchOutcome<T>
where
    T: SpacingNumeric,
{
    #[inline]
    pub fn new(results: Vec<Result<SearchOutcome<T>, InputError>>, statistics: BatchStatistics) -> Self {
        debug_assert_eq!(
            results.len(),
            statistics.queries,
            "batch statistics disagree with the number of results"
        );
        Self {
            results,
            statistics,
        }
    }

    #[inline]
    pub fn results(&self) -> &[Result<SearchOutcome<T>, InputError>] {
        &self.results
    }

    #[inline]
    pub fn statistics(&self) -> &BatchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the optimal distance of every query, in query order.
    pub fn distances(&self) -> impl Iterator<Item = Result<T, InputError>> + '_ {
        self.results
            .iter()
            .map(|r| r.as_ref().map(SearchOutcome::distance).map_err(|e| *e))
    }

    #[inline]
    pub fn into_results(self) -> Vec<Result<SearchOutcome<T>, InputError>> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picket_model::placement::Placement;
    use picket_search::stats::SearchStatistics;

    #[test]
    fn test_distances_and_statistics() {
        let solved = SearchOutcome::new(Placement::new(9i64, vec![1, 10]), SearchStatistics::new(3, 2));
        let failed = InputError::InvalidCount {
            requested: 0,
            available: 3,
        };
        let statistics = BatchStatistics {
            queries: 2,
            failed_queries: 1,
            used_threads: 2,
            solve_duration: std::time::Duration::from_millis(5),
        };
        let outcome = BatchOutcome::new(vec![Ok(solved), Err(failed)], statistics);

        assert_eq!(outcome.len(), 2);
        assert!(!outcome.is_empty());
        assert_eq!(outcome.distances().collect::<Vec<_>>(), vec![Ok(9), Err(failed)]);
        assert_eq!(outcome.statistics().solved_queries(), 1);

        let rendered = outcome.statistics().to_string();
        assert!(rendered.contains("Queries: 2 (1 solved, 1 failed)"));
        assert!(rendered.contains("Used Threads: 2"));
        assert_eq!(outcome.into_results().len(), 2);
    }
}
