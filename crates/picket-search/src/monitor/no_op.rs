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

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use num_traits::PrimInt;
use picket_core::math::interval::ClosedInterval;
use picket_model::positions::{PlacementCount, SortedPositionSet};

/// A no-operation monitor that implements the `SearchMonitor` trait
/// but does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: PrimInt,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: PrimInt,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for NoOperationMonitor<T>
where
    T: PrimInt,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(
        &mut self,
        _positions: &SortedPositionSet<T>,
        _count: PlacementCount,
        _domain: ClosedInterval<T>,
    ) {
    }

    #[inline(always)]
    fn on_probe(&mut self, _distance: T, _feasible: bool, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _best: T, _statistics: &SearchStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_callbacks_are_inert() {
        let mut monitor = NoOperationMonitor::<i64>::new();
        let positions = SortedPositionSet::try_from(vec![1i64, 2]).unwrap();
        let stats = SearchStatistics::new(2, 1);

        monitor.on_enter_search(&positions, PlacementCount::new(1), ClosedInterval::new(0, 1));
        monitor.on_probe(0, true, &stats);
        monitor.on_improvement(0, &stats);
        monitor.on_exit_search(0, &stats);

        assert_eq!(monitor.name(), "NoOperationMonitor");
        assert_eq!(monitor, NoOperationMonitor::default());
    }
}
