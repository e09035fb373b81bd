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

//! # Optimal Spacing Search
//!
//! Finds the largest distance `d` such that `k` items can be placed on the
//! candidate positions with every pair at least `d` apart.
//!
//! ## Method
//!
//! The positions are sorted once. The candidate distances form the closed
//! domain `[0, max - min]`, and feasibility (see `feasibility`) is monotone
//! non-increasing over it, so a bisection for the last feasible distance is
//! exact. Each step probes the overflow-safe midpoint of the remaining window;
//! a feasible probe records the new best and continues in the upper half, an
//! infeasible one continues in the lower half. Distance `0` is always feasible
//! for a valid count, so the search always produces an answer.
//!
//! Cost is `O(n log n)` for sorting plus `O(n log(max - min))` for the probes.
//!
//! ## Entry Points
//!
//! - [`max_min_distance`]: plain function over a slice, returns the distance.
//! - [`optimal_distance`]: the same over an already sorted set.
//! - [`SpacingSearch`]: monitored search producing a [`SearchOutcome`] with the
//!   witness placement and statistics. Configured through
//!   [`SpacingSearchBuilder`].

use crate::{
    feasibility::{greedy_placement, is_feasible},
    monitor::{composite::CompositeMonitor, search_monitor::SearchMonitor},
    num::SpacingNumeric,
    result::SearchOutcome,
    stats::SearchStatistics,
};
use picket_core::algorithm::last_satisfying;
use picket_model::{
    error::InputError,
    placement::Placement,
    positions::{PlacementCount, PositionSet, SortedPositionSet},
};
use std::time::Instant;

/// Checks `count` against a sorted set.
#[inline]
fn check_count<T>(positions: &SortedPositionSet<T>, count: PlacementCount) -> Result<(), InputError>
where
    T: SpacingNumeric,
{
    if count.get() > positions.len() {
        return Err(InputError::InvalidCount {
            requested: count.get(),
            available: positions.len(),
        });
    }
    Ok(())
}

/// Returns the maximum achievable minimum pairwise distance when placing
/// `count` items on `positions`.
///
/// The positions may be given in any order and may contain duplicates.
///
/// # Errors
///
/// - `InputError::EmptyInput` if `positions` is empty.
/// - `InputError::SpanOverflow` if `max - min` does not fit in `T`.
/// - `InputError::InvalidCount` if `count` is zero or exceeds `positions.len()`.
///
/// # Examples
///
/// ```rust
/// # use picket_search::search::max_min_distance;
/// # use picket_model::error::InputError;
/// assert_eq!(max_min_distance(&[1, 2, 4, 8, 9], 3), Ok(3));
/// assert_eq!(max_min_distance(&[1, 5, 10], 2), Ok(9));
/// assert_eq!(max_min_distance(&[5], 1), Ok(0));
/// assert_eq!(
///     max_min_distance(&[1, 2], 0),
///     Err(InputError::InvalidCount { requested: 0, available: 2 })
/// );
/// ```
pub fn max_min_distance<T>(positions: &[T], count: usize) -> Result<T, InputError>
where
    T: SpacingNumeric,
{
    let set = PositionSet::from_slice(positions)?;
    let count = set.placement_count(count)?;
    optimal_distance(&set.into_sorted(), count)
}

/// Returns the maximum achievable minimum pairwise distance on an already
/// sorted set.
///
/// # Errors
///
/// Returns `InputError::InvalidCount` if `count` exceeds the number of positions.
pub fn optimal_distance<T>(
    positions: &SortedPositionSet<T>,
    count: PlacementCount,
) -> Result<T, InputError>
where
    T: SpacingNumeric,
{
    check_count(positions, count)?;

    Ok(last_satisfying(positions.distance_domain(), |distance| {
        is_feasible(positions, distance, count)
    })
    .unwrap_or(T::ZERO))
}

/// A monitored spacing search.
///
/// The search itself holds no state between calls apart from its monitors;
/// every call sorts (or receives) its own position set and discards it on
/// return.
///
/// # Examples
///
/// ```rust
/// # use picket_search::search::SpacingSearchBuilder;
/// let mut search = SpacingSearchBuilder::<i64>::new().build();
/// let outcome = search.solve(&[9, 1, 8, 2, 4], 3).unwrap();
/// assert_eq!(outcome.distance(), 3);
/// assert_eq!(outcome.placement().positions(), &[1, 4, 8]);
/// ```
pub struct SpacingSearch<'a, T>
where
    T: SpacingNumeric,
{
    monitor: CompositeMonitor<'a, T>,
}

impl<'a, T> SpacingSearch<'a, T>
where
    T: SpacingNumeric,
{
    /// Returns the monitors attached to this search.
    #[inline]
    pub fn monitor(&self) -> &CompositeMonitor<'a, T> {
        &self.monitor
    }

    /// Validates and sorts `positions`, then runs the search.
    ///
    /// # Errors
    ///
    /// See [`max_min_distance`].
    pub fn solve(&mut self, positions: &[T], count: usize) -> Result<SearchOutcome<T>, InputError> {
        let set = PositionSet::from_slice(positions)?;
        let count = set.placement_count(count)?;
        self.solve_sorted(&set.into_sorted(), count)
    }

    /// Runs the search on a validated set, sorting a copy of it first.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidCount` if `count` exceeds the number of positions.
    pub fn solve_set(
        &mut self,
        positions: &PositionSet<T>,
        count: PlacementCount,
    ) -> Result<SearchOutcome<T>, InputError> {
        self.solve_sorted(&positions.sorted(), count)
    }

    /// Runs the search on an already sorted set.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidCount` if `count` exceeds the number of positions.
    pub fn solve_sorted(
        &mut self,
        positions: &SortedPositionSet<T>,
        count: PlacementCount,
    ) -> Result<SearchOutcome<T>, InputError> {
        check_count(positions, count)?;

        let start_time = Instant::now();
        let domain = positions.distance_domain();
        let mut statistics = SearchStatistics::new(positions.len(), count.get());

        self.monitor.on_enter_search(positions, count, domain);

        let monitor = &mut self.monitor;
        let best = last_satisfying(domain, |distance| {
            let feasible = is_feasible(positions, distance, count);
            statistics.on_probe(feasible);
            monitor.on_probe(distance, feasible, &statistics);
            if feasible {
                monitor.on_improvement(distance, &statistics);
            }
            feasible
        })
        .unwrap_or(T::ZERO);

        // `best` is feasible and `count <= positions.len()`, so the scan at
        // `best` always takes `count` positions.
        let selection = greedy_placement(positions, best, count)
            .expect("greedy scan at the optimal distance must place every item");

        statistics.search_duration = start_time.elapsed();
        self.monitor.on_exit_search(best, &statistics);

        Ok(SearchOutcome::new(Placement::new(best, selection), statistics))
    }
}

impl<'a, T> std::fmt::Debug for SpacingSearch<'a, T>
where
    T: SpacingNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpacingSearch")
            .field("monitor", &self.monitor)
            .finish()
    }
}

/// Builder for `SpacingSearch`.
pub struct SpacingSearchBuilder<'a, T>
where
    T: SpacingNumeric,
{
    monitor: CompositeMonitor<'a, T>,
}

impl<'a, T> Default for SpacingSearchBuilder<'a, T>
where
    T: SpacingNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> SpacingSearchBuilder<'a, T>
where
    T: SpacingNumeric,
{
    /// Creates a builder without monitors.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitor: CompositeMonitor::new(),
        }
    }

    /// Attaches a monitor. Monitors are notified in the order they were added.
    #[inline]
    pub fn with_monitor<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitor.add_monitor(monitor);
        self
    }

    /// Attaches a boxed monitor.
    #[inline]
    pub fn with_monitor_boxed(mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) -> Self {
        self.monitor.add_monitor_boxed(monitor);
        self
    }

    #[inline]
    pub fn build(self) -> SpacingSearch<'a, T> {
        SpacingSearch {
            monitor: self.monitor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        feasibility::max_items_at,
        monitor::{
            log::LogMonitor,
            no_op::NoOperationMonitor,
            trace::{Probe, TraceMonitor},
        },
    };
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type IntegerType = i64;

    /// Tries every candidate distance from the top; independent of bisection.
    fn linear_reference(positions: &[IntegerType], count: usize) -> IntegerType {
        let sorted = SortedPositionSet::try_from(positions.to_vec()).unwrap();
        (0..=sorted.span())
            .rev()
            .find(|&d| max_items_at(&sorted, d) >= count)
            .unwrap()
    }

    #[test]
    fn test_scenario_a() {
        assert_eq!(max_min_distance(&[1i64, 2, 4, 8, 9], 3), Ok(3));
    }

    #[test]
    fn test_scenario_b_extremes() {
        assert_eq!(max_min_distance(&[1i64, 5, 10], 2), Ok(9));
    }

    #[test]
    fn test_scenario_c_single_point() {
        assert_eq!(max_min_distance(&[5i64], 1), Ok(0));
    }

    #[test]
    fn test_scenario_d_all_positions() {
        assert_eq!(max_min_distance(&[1i64, 2, 3, 4, 5], 5), Ok(1));
    }

    #[test]
    fn test_scenario_e_invalid_counts() {
        assert_eq!(
            max_min_distance(&[1i64, 2, 3], 0),
            Err(InputError::InvalidCount {
                requested: 0,
                available: 3
            })
        );
        assert_eq!(
            max_min_distance(&[1i64, 2, 3], 4),
            Err(InputError::InvalidCount {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_empty_input_is_rejected_first() {
        assert_eq!(max_min_distance::<i64>(&[], 0), Err(InputError::EmptyInput));
        assert_eq!(max_min_distance::<i64>(&[], 3), Err(InputError::EmptyInput));
    }

    #[test]
    fn test_span_overflow_is_rejected() {
        assert_eq!(
            max_min_distance(&[i32::MIN, i32::MAX], 2),
            Err(InputError::SpanOverflow)
        );
    }

    #[test]
    fn test_unsorted_input_with_duplicates() {
        assert_eq!(max_min_distance(&[9i64, 1, 4, 4, 1, 9], 3), Ok(3));
        assert_eq!(max_min_distance(&[7i64, 7, 7], 3), Ok(0));
        assert_eq!(max_min_distance(&[7i64, 7, 7], 1), Ok(0));
    }

    #[test]
    fn test_negative_coordinates() {
        assert_eq!(max_min_distance(&[-10i64, -4, 0, 3], 3), Ok(6));
    }

    #[test]
    fn test_full_unsigned_range() {
        assert_eq!(max_min_distance(&[0u64, u64::MAX], 2), Ok(u64::MAX));
        assert_eq!(max_min_distance(&[0u8, 100, 255], 3), Ok(100));
        assert_eq!(max_min_distance(&[u8::MAX, 0], 1), Ok(u8::MAX));
    }

    #[test]
    fn test_near_full_signed_range() {
        assert_eq!(max_min_distance(&[i8::MIN, -1], 2), Ok(127));
        assert_eq!(max_min_distance(&[-1i8, 126], 2), Ok(127));
        assert_eq!(
            max_min_distance(&[-1i8, i8::MAX], 2),
            Err(InputError::SpanOverflow)
        );
    }

    #[test]
    fn test_single_item_returns_span() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let n = rng.random_range(1..=30);
            let positions: Vec<IntegerType> =
                (0..n).map(|_| rng.random_range(-1000..=1000)).collect();
            let span = positions.iter().max().unwrap() - positions.iter().min().unwrap();
            assert_eq!(max_min_distance(&positions, 1), Ok(span));
        }
    }

    #[test]
    fn test_all_items_returns_min_gap() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..100 {
            let n = rng.random_range(2..=30);
            let positions: Vec<IntegerType> =
                (0..n).map(|_| rng.random_range(-1000..=1000)).collect();
            let sorted = SortedPositionSet::try_from(positions.clone()).unwrap();
            assert_eq!(max_min_distance(&positions, n), Ok(sorted.min_gap().unwrap()));
        }
    }

    #[test]
    fn test_matches_linear_reference() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..300 {
            let n = rng.random_range(1..=25);
            let positions: Vec<IntegerType> =
                (0..n).map(|_| rng.random_range(0..=200)).collect();
            let count = rng.random_range(1..=n);
            assert_eq!(
                max_min_distance(&positions, count),
                Ok(linear_reference(&positions, count)),
                "positions {:?}, count {}",
                positions,
                count
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let positions = [13i64, 2, 99, 45, 45, 7, 60];
        let first = max_min_distance(&positions, 4);
        let second = max_min_distance(&positions, 4);
        assert_eq!(first, second);

        let mut search = SpacingSearchBuilder::new()
            .with_monitor(NoOperationMonitor::new())
            .build();
        let a = search.solve(&positions, 4).unwrap();
        let b = search.solve(&positions, 4).unwrap();
        assert_eq!(a.placement(), b.placement());
        assert_eq!(a.statistics().probes, b.statistics().probes);
    }

    #[test]
    fn test_outcome_witness_and_statistics() {
        let mut search = SpacingSearchBuilder::<i64>::new().build();
        let outcome = search.solve(&[1, 2, 4, 8, 9], 3).unwrap();

        assert_eq!(outcome.distance(), 3);
        let placement = outcome.placement();
        assert_eq!(placement.num_items(), 3);
        assert_eq!(placement.positions(), &[1, 4, 8]);
        assert!(placement.realised_gap().unwrap() >= 3);

        let stats = outcome.statistics();
        assert_eq!(stats.num_positions, 5);
        assert_eq!(stats.num_items, 3);
        assert!(stats.probes >= 1);
        assert!(stats.feasible_probes >= 1);
        assert!(stats.feasible_probes <= stats.probes);
    }

    #[test]
    fn test_trace_follows_bisection() {
        let mut trace = TraceMonitor::new();
        let outcome = {
            let mut search = SpacingSearchBuilder::new()
                .with_monitor(&mut trace)
                .with_monitor(LogMonitor::default())
                .build();
            assert_eq!(search.monitor().len(), 2);
            search.solve(&[1i64, 2, 4, 8, 9], 3).unwrap()
        };

        // Domain [0, 8]: mid 4 infeasible -> [0, 3], mid 1 feasible -> [2, 3],
        // mid 2 feasible -> [3, 3], mid 3 feasible -> done.
        let probe = |distance, feasible| Probe { distance, feasible };
        assert_eq!(
            trace.probes(),
            &[
                probe(4, false),
                probe(1, true),
                probe(2, true),
                probe(3, true)
            ]
        );
        assert_eq!(trace.improvements(), &[1, 2, 3]);
        assert_eq!(trace.best(), Some(3));
        assert_eq!(outcome.statistics().probes, 4);
        assert_eq!(outcome.statistics().feasible_probes, 3);
    }

    #[test]
    fn test_improvements_strictly_increase() {
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..50 {
            let n = rng.random_range(1..=40);
            let positions: Vec<IntegerType> =
                (0..n).map(|_| rng.random_range(0..=10_000)).collect();
            let count = rng.random_range(1..=n);

            let mut trace = TraceMonitor::new();
            let best = {
                let mut search = SpacingSearchBuilder::new().with_monitor(&mut trace).build();
                search.solve(&positions, count).unwrap().distance()
            };

            assert!(trace.improvements().windows(2).all(|w| w[0] < w[1]));
            assert_eq!(trace.improvements().last().copied().unwrap_or(0), best);
        }
    }

    #[test]
    fn test_solve_set_matches_plain_function() {
        let set = PositionSet::new(vec![30i64, 0, 10, 20, 25]).unwrap();
        let count = set.placement_count(3).unwrap();
        let mut search = SpacingSearchBuilder::new().build();
        let outcome = search.solve_set(&set, count).unwrap();
        assert_eq!(
            optimal_distance(&set.sorted(), count),
            Ok(outcome.distance())
        );
        assert_eq!(outcome.distance(), 10);
    }

    #[test]
    fn test_presorted_entry_points_agree_on_oversized_count() {
        let sorted = SortedPositionSet::try_from(vec![1i64, 2]).unwrap();
        let expected = InputError::InvalidCount {
            requested: 3,
            available: 2,
        };
        assert_eq!(optimal_distance(&sorted, PlacementCount::new(3)), Err(expected));

        let mut search = SpacingSearchBuilder::new().build();
        assert_eq!(
            search
                .solve_sorted(&sorted, PlacementCount::new(3))
                .unwrap_err(),
            expected
        );
        assert_eq!(optimal_distance(&sorted, PlacementCount::new(2)), Ok(1));
    }

    #[test]
    fn test_witness_places_every_item() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut search = SpacingSearchBuilder::new().build();
        for _ in 0..200 {
            let n = rng.random_range(1..=30);
            let positions: Vec<IntegerType> =
                (0..n).map(|_| rng.random_range(-50..=50)).collect();
            let count = rng.random_range(1..=n);

            let outcome = search.solve(&positions, count).unwrap();
            let placement = outcome.placement();
            assert_eq!(placement.num_items(), count);
            assert!(placement.positions().windows(2).all(|w| w[0] <= w[1]));
            if let Some(gap) = placement.realised_gap() {
                assert!(gap >= outcome.distance());
            }
        }
    }
}
