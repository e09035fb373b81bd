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

/// Statistics collected during a spacing search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of candidate positions, duplicates included.
    pub num_positions: usize,
    /// Number of items to place.
    pub num_items: usize,
    /// Number of feasibility checks issued by the bisection.
    pub probes: u64,
    /// Number of feasibility checks that succeeded.
    pub feasible_probes: u64,
    /// Total duration of the search, sorting excluded.
    pub search_duration: std::time::Duration,
}

impl SearchStatistics {
    /// Creates zeroed statistics for a search over `num_positions` positions
    /// placing `num_items` items.
    #[inline]
    pub fn new(num_positions: usize, num_items: usize) -> Self {
        Self {
            num_positions,
            num_items,
            probes: 0,
            feasible_probes: 0,
            search_duration: std::time::Duration::ZERO,
        }
    }

    /// Records the result of one feasibility check.
    #[inline(always)]
    pub fn on_probe(&mut self, feasible: bool) {
        self.probes += 1;
        if feasible {
            self.feasible_probes += 1;
        }
    }

    /// Number of feasibility checks that failed.
    #[inline]
    pub fn infeasible_probes(&self) -> u64 {
        self.probes - self.feasible_probes
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Positions: {}", self.num_positions)?;
        writeln!(f, "  Items: {}", self.num_items)?;
        writeln!(
            f,
            "  Probes: {} ({} feasible, {} infeasible)",
            self.probes,
            self.feasible_probes,
            self.infeasible_probes()
        )?;
        writeln!(
            f,
            "  Search Duration (secs): {:.3}",
            self.search_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    num_positions: usize,
    num_items: usize,
    probes: u64,
    feasible_probes: u64,
    search_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            num_positions: 0,
            num_items: 0,
            probes: 0,
            feasible_probes: 0,
            search_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of candidate positions.
    #[inline]
    pub fn num_positions(mut self, num_positions: usize) -> Self {
        self.num_positions = num_positions;
        self
    }

    /// Sets the number of items to place.
    #[inline]
    pub fn num_items(mut self, num_items: usize) -> Self {
        self.num_items = num_items;
        self
    }

    /// Sets the number of feasibility checks.
    #[inline]
    pub fn probes(mut self, probes: u64) -> Self {
        self.probes = probes;
        self
    }

    /// Sets the number of successful feasibility checks.
    #[inline]
    pub fn feasible_probes(mut self, feasible_probes: u64) -> Self {
        self.feasible_probes = feasible_probes;
        self
    }

    /// Sets the total search duration.
    #[inline]
    pub fn search_duration(mut self, search_duration: std::time::Duration) -> Self {
        self.search_duration = search_duration;
        self
    }

    /// Builds the `SearchStatistics` instance.
    ///
    /// # Panics
    ///
    /// Panics if more feasible probes than probes were set.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        assert!(
            self.feasible_probes <= self.probes,
            "called `SearchStatisticsBuilder::build` with more feasible probes ({}) than probes ({})",
            self.feasible_probes,
            self.probes
        );

        SearchStatistics {
            num_positions: self.num_positions,
            num_items: self.num_items,
            probes: self.probes,
            feasible_probes: self.feasible_probes,
            search_duration: self.search_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use super::SearchStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SearchStatisticsBuilder::new()
            .num_positions(5)
            .num_items(3)
            .probes(4)
            .feasible_probes(2)
            .search_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.num_positions, 5);
        assert_eq!(stats.num_items, 3);
        assert_eq!(stats.probes, 4);
        assert_eq!(stats.feasible_probes, 2);
        assert_eq!(stats.infeasible_probes(), 2);
        assert_eq!(stats.search_duration, Duration::from_millis(1234));
    }

    #[test]
    #[should_panic(expected = "more feasible probes")]
    fn builder_rejects_inconsistent_counts() {
        let _ = SearchStatisticsBuilder::new()
            .probes(1)
            .feasible_probes(2)
            .build();
    }

    #[test]
    fn test_on_probe_counts() {
        let mut stats = SearchStatistics::new(10, 2);
        stats.on_probe(true);
        stats.on_probe(false);
        stats.on_probe(true);
        assert_eq!(stats.probes, 3);
        assert_eq!(stats.feasible_probes, 2);
        assert_eq!(stats.infeasible_probes(), 1);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SearchStatistics {
            num_positions: 5,
            num_items: 3,
            probes: 4,
            feasible_probes: 3,
            search_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Search Statistics:"), "missing header");
        assert!(rendered.contains("Positions: 5"), "missing num_positions");
        assert!(rendered.contains("Items: 3"), "missing num_items");
        assert!(
            rendered.contains("Probes: 4 (3 feasible, 1 infeasible)"),
            "missing probe counts"
        );
        assert!(
            rendered.contains("Search Duration (secs): 1.234"),
            "duration not formatted to 3 decimals"
        );
    }
}
