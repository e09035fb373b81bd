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

use crate::stats::SearchStatistics;
use num_traits::PrimInt;
use picket_model::placement::Placement;

/// The outcome of a completed spacing search.
///
/// A search that starts always finishes with the optimal distance; there is no
/// partial or aborted outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    placement: Placement<T>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: PrimInt,
{
    #[inline]
    pub fn new(placement: Placement<T>, statistics: SearchStatistics) -> Self {
        Self {
            placement,
            statistics,
        }
    }

    /// The maximum achievable minimum pairwise distance.
    #[inline]
    pub fn distance(&self) -> T {
        self.placement.distance()
    }

    #[inline]
    pub fn placement(&self) -> &Placement<T> {
        &self.placement
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_placement(self) -> Placement<T> {
        self.placement
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.placement)?;
        writeln!(f)?;
        write!(f, "{}", self.statistics)
    }
}
