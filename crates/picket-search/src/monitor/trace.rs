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

/// A single feasibility check recorded by a `TraceMonitor`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Probe<T> {
    /// The candidate distance that was checked.
    pub distance: T,
    /// Whether the distance was feasible.
    pub feasible: bool,
}

/// A monitor that records every probe of the most recent search.
///
/// Entering a new search clears the previous recording.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TraceMonitor<T>
where
    T: PrimInt,
{
    domain: Option<ClosedInterval<T>>,
    probes: Vec<Probe<T>>,
    improvements: Vec<T>,
    best: Option<T>,
}

impl<T> TraceMonitor<T>
where
    T: PrimInt,
{
    /// Creates an empty `TraceMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            domain: None,
            probes: Vec::new(),
            improvements: Vec::new(),
            best: None,
        }
    }

    /// The distance domain of the recorded search.
    #[inline]
    pub fn domain(&self) -> Option<ClosedInterval<T>> {
        self.domain
    }

    /// All probes in the order they were issued.
    #[inline]
    pub fn probes(&self) -> &[Probe<T>] {
        &self.probes
    }

    /// Every best-distance improvement in the order it happened.
    #[inline]
    pub fn improvements(&self) -> &[T] {
        &self.improvements
    }

    /// The final distance, once the search has exited.
    #[inline]
    pub fn best(&self) -> Option<T> {
        self.best
    }
}

impl<T> SearchMonitor<T> for TraceMonitor<T>
where
    T: PrimInt,
{
    fn name(&self) -> &str {
        "TraceMonitor"
    }

    fn on_enter_search(
        &mut self,
        _positions: &SortedPositionSet<T>,
        _count: PlacementCount,
        domain: ClosedInterval<T>,
    ) {
        self.domain = Some(domain);
        self.probes.clear();
        self.improvements.clear();
        self.best = None;
    }

    fn on_probe(&mut self, distance: T, feasible: bool, _statistics: &SearchStatistics) {
        self.probes.push(Probe { distance, feasible });
    }

    fn on_improvement(&mut self, distance: T, _statistics: &SearchStatistics) {
        self.improvements.push(distance);
    }

    fn on_exit_search(&mut self, best: T, _statistics: &SearchStatistics) {
        self.best = Some(best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_resets() {
        let mut trace = TraceMonitor::<i32>::new();
        let positions = SortedPositionSet::try_from(vec![0, 10]).unwrap();
        let stats = SearchStatistics::new(2, 2);

        trace.on_enter_search(&positions, PlacementCount::new(2), ClosedInterval::new(0, 10));
        trace.on_probe(5, true, &stats);
        trace.on_improvement(5, &stats);
        trace.on_exit_search(5, &stats);

        assert_eq!(trace.domain(), Some(ClosedInterval::new(0, 10)));
        assert_eq!(
            trace.probes(),
            &[Probe {
                distance: 5,
                feasible: true
            }]
        );
        assert_eq!(trace.improvements(), &[5]);
        assert_eq!(trace.best(), Some(5));

        trace.on_enter_search(&positions, PlacementCount::new(1), ClosedInterval::new(0, 10));
        assert!(trace.probes().is_empty());
        assert!(trace.improvements().is_empty());
        assert_eq!(trace.best(), None);
    }
}
