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

//! Spacing search monitoring interface
//!
//! Lifecycle
//! - enter -> probe (-> improvement) ... -> exit
//! - Each probe is one feasibility check at a candidate distance. A feasible
//!   probe always raises the best known distance, since the bisection only
//!   moves upwards after a success, so it is followed by `on_improvement`.
//! - `SearchStatistics` is provided to the per-probe and exit callbacks.

use crate::stats::SearchStatistics;
use num_traits::PrimInt;
use picket_core::math::interval::ClosedInterval;
use picket_model::positions::{PlacementCount, SortedPositionSet};

/// Trait for observing the spacing search.
pub trait SearchMonitor<T>
where
    T: PrimInt,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once the inputs are validated, before the first probe.
    /// `domain` is the closed range of candidate distances.
    fn on_enter_search(
        &mut self,
        positions: &SortedPositionSet<T>,
        count: PlacementCount,
        domain: ClosedInterval<T>,
    );
    /// Called after each feasibility check.
    fn on_probe(&mut self, distance: T, feasible: bool, statistics: &SearchStatistics);
    /// Called when a probe raises the best known distance.
    fn on_improvement(&mut self, _distance: T, _statistics: &SearchStatistics) {}
    /// Called when the search ends with the optimal distance `best`.
    fn on_exit_search(&mut self, best: T, statistics: &SearchStatistics);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T, M> SearchMonitor<T> for &mut M
where
    T: PrimInt,
    M: SearchMonitor<T> + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(
        &mut self,
        positions: &SortedPositionSet<T>,
        count: PlacementCount,
        domain: ClosedInterval<T>,
    ) {
        (**self).on_enter_search(positions, count, domain);
    }

    fn on_probe(&mut self, distance: T, feasible: bool, statistics: &SearchStatistics) {
        (**self).on_probe(distance, feasible, statistics);
    }

    fn on_improvement(&mut self, distance: T, statistics: &SearchStatistics) {
        (**self).on_improvement(distance, statistics);
    }

    fn on_exit_search(&mut self, best: T, statistics: &SearchStatistics) {
        (**self).on_exit_search(best, statistics);
    }
}
