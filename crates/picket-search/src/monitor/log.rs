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

//! Progress records through the `log` facade.
//!
//! `LogMonitor` never prints. It emits records at `info` for the start and the
//! end of a search and, if enabled, at `debug` for every probe. Installing a
//! logger, and therefore deciding whether and how anything is shown, is left
//! to the application.

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use ::log::{Level, debug, info, log_enabled};
use num_traits::PrimInt;
use picket_core::math::interval::ClosedInterval;
use picket_model::positions::{PlacementCount, SortedPositionSet};
use std::marker::PhantomData;

/// A monitor that reports search progress through the `log` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMonitor<T>
where
    T: PrimInt + std::fmt::Display,
{
    target: &'static str,
    log_probes: bool,
    _phantom: PhantomData<T>,
}

impl<T> LogMonitor<T>
where
    T: PrimInt + std::fmt::Display,
{
    /// Creates a `LogMonitor` that logs under `target`, with probe records enabled.
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            log_probes: true,
            _phantom: PhantomData,
        }
    }

    /// Enables or disables the per-probe `debug` records.
    #[inline]
    pub fn with_probe_logging(mut self, yes: bool) -> Self {
        self.log_probes = yes;
        self
    }

    /// Returns the log target.
    #[inline]
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Returns `true` if per-probe records are enabled.
    #[inline]
    pub fn logs_probes(&self) -> bool {
        self.log_probes
    }
}

impl<T> Default for LogMonitor<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn default() -> Self {
        Self::new("picket_search")
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(target: {}, log_probes: {})",
            self.target, self.log_probes
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(
        &mut self,
        positions: &SortedPositionSet<T>,
        count: PlacementCount,
        domain: ClosedInterval<T>,
    ) {
        info!(
            target: self.target,
            "spacing search started: {} positions in [{}, {}], {} items, distance domain {}",
            positions.len(),
            positions.first(),
            positions.last(),
            count,
            domain
        );
    }

    fn on_probe(&mut self, distance: T, feasible: bool, statistics: &SearchStatistics) {
        if self.log_probes && log_enabled!(target: self.target, Level::Debug) {
            debug!(
                target: self.target,
                "probe #{}: distance {} is {}",
                statistics.probes,
                distance,
                if feasible { "feasible" } else { "infeasible" }
            );
        }
    }

    fn on_exit_search(&mut self, best: T, statistics: &SearchStatistics) {
        info!(
            target: self.target,
            "spacing search finished: best distance {} after {} probes ({} feasible) in {:.3}s",
            best,
            statistics.probes,
            statistics.feasible_probes,
            statistics.search_duration.as_secs_f64()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration() {
        let monitor = LogMonitor::<i64>::default();
        assert_eq!(monitor.target(), "picket_search");
        assert!(monitor.logs_probes());

        let quiet = LogMonitor::<i64>::new("custom").with_probe_logging(false);
        assert_eq!(quiet.target(), "custom");
        assert!(!quiet.logs_probes());
        assert_eq!(
            quiet.to_string(),
            "LogMonitor(target: custom, log_probes: false)"
        );
    }

    #[test]
    fn test_callbacks_without_logger_installed() {
        let mut monitor = LogMonitor::<u16>::default();
        let positions = SortedPositionSet::try_from(vec![3u16, 9]).unwrap();
        let stats = SearchStatistics::new(2, 2);

        monitor.on_enter_search(&positions, PlacementCount::new(2), ClosedInterval::new(0, 6));
        monitor.on_probe(3, true, &stats);
        monitor.on_exit_search(6, &stats);
        assert_eq!(monitor.name(), "LogMonitor");
    }
}
