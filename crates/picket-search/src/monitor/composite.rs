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

//! Fan-out monitor
//!
//! `CompositeMonitor` forwards every event to its children in insertion
//! order. This lets a search carry logging and tracing at the same time
//! without coupling either to the bisection driver.

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use num_traits::PrimInt;
use picket_core::math::interval::ClosedInterval;
use picket_model::positions::{PlacementCount, SortedPositionSet};

/// A monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of child monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if there are no child monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Returns an iterator over the child monitors in dispatch order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &(dyn SearchMonitor<T> + 'a)> {
        self.monitors.iter().map(|m| m.as_ref())
    }
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: PrimInt,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(
        &mut self,
        positions: &SortedPositionSet<T>,
        count: PlacementCount,
        domain: ClosedInterval<T>,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(positions, count, domain);
        }
    }

    fn on_probe(&mut self, distance: T, feasible: bool, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_probe(distance, feasible, statistics);
        }
    }

    fn on_improvement(&mut self, distance: T, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_improvement(distance, statistics);
        }
    }

    fn on_exit_search(&mut self, best: T, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(best, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Appends `"<tag>:<event>"` to a shared journal for every callback.
    struct Journal {
        tag: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SearchMonitor<i64> for Journal {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_enter_search(
            &mut self,
            _positions: &SortedPositionSet<i64>,
            _count: PlacementCount,
            _domain: ClosedInterval<i64>,
        ) {
            self.events.borrow_mut().push(format!("{}:enter", self.tag));
        }

        fn on_probe(&mut self, distance: i64, feasible: bool, _statistics: &SearchStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:probe({},{})", self.tag, distance, feasible));
        }

        fn on_improvement(&mut self, distance: i64, _statistics: &SearchStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:improve({})", self.tag, distance));
        }

        fn on_exit_search(&mut self, best: i64, _statistics: &SearchStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:exit({})", self.tag, best));
        }
    }

    #[test]
    fn test_dispatch_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(Journal {
            tag: "a",
            events: Rc::clone(&events),
        });
        composite.add_monitor_boxed(Box::new(Journal {
            tag: "b",
            events: Rc::clone(&events),
        }));

        let positions = SortedPositionSet::try_from(vec![0i64, 4]).unwrap();
        let stats = SearchStatistics::new(2, 2);
        composite.on_enter_search(&positions, PlacementCount::new(2), ClosedInterval::new(0, 4));
        composite.on_probe(2, true, &stats);
        composite.on_improvement(2, &stats);
        composite.on_exit_search(4, &stats);

        assert_eq!(
            *events.borrow(),
            vec![
                "a:enter",
                "b:enter",
                "a:probe(2,true)",
                "b:probe(2,true)",
                "a:improve(2)",
                "b:improve(2)",
                "a:exit(4)",
                "b:exit(4)",
            ]
        );
    }

    #[test]
    fn test_len_names_and_formatting() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let composite: CompositeMonitor<'_, i64> = vec![
            Box::new(Journal {
                tag: "first",
                events: Rc::clone(&events),
            }) as Box<dyn SearchMonitor<i64>>,
            Box::new(Journal {
                tag: "second",
                events,
            }),
        ]
        .into_iter()
        .collect();

        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
        let names: Vec<&str> = composite.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([first, second])"
        );
        assert!(format!("{:?}", composite).contains("first, second"));
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeMonitor::<u32>::with_capacity(4);
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);
    }
}
