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

//! Greedy feasibility scan.
//!
//! Decides whether `k` items can be placed on sorted candidate positions with
//! every pair at least `d` apart. The scan takes the first position, then each
//! subsequent position whose distance to the last taken one is at least `d`.
//! Taking the earliest eligible position never hurts later choices, so the
//! greedy count is the maximum number of items placeable at distance `d`.
//!
//! As a consequence, feasibility is monotone non-increasing in `d`: a
//! selection valid at `d` is valid at every smaller distance. The bisection in
//! `search` depends on this.
//!
//! A `SortedPositionSet` guarantees that no difference computed here can
//! overflow: every gap between sorted neighbours is bounded by the span, and
//! the span fits the coordinate type.

use num_traits::PrimInt;
use picket_model::positions::{PlacementCount, SortedPositionSet};

/// Runs the greedy scan, calling `on_select` for each taken position.
///
/// Stops as soon as `limit` positions have been taken. Returns the number of
/// taken positions.
#[inline]
fn greedy_scan<T, F>(positions: &[T], distance: T, limit: usize, mut on_select: F) -> usize
where
    T: PrimInt,
    F: FnMut(T),
{
    let Some((&first, rest)) = positions.split_first() else {
        return 0;
    };

    on_select(first);
    let mut last_chosen = first;
    let mut taken = 1;

    for &position in rest {
        if taken >= limit {
            break;
        }
        if position - last_chosen >= distance {
            on_select(position);
            last_chosen = position;
            taken += 1;
        }
    }

    taken
}

/// Returns `true` if `count` items can be placed on `positions` with every pair
/// at least `distance` apart.
///
/// Runs in linear time and has no side effects. A distance of zero is feasible
/// for every valid count, and a count of one is feasible for every distance.
/// Negative distances behave like zero.
///
/// # Examples
///
/// ```rust
/// # use picket_model::positions::{PlacementCount, SortedPositionSet};
/// # use picket_search::feasibility::is_feasible;
/// let sorted = SortedPositionSet::try_from(vec![1, 2, 4, 8, 9]).unwrap();
/// let k = PlacementCount::new(3);
/// assert!(is_feasible(&sorted, 3, k));
/// assert!(!is_feasible(&sorted, 4, k));
/// ```
pub fn is_feasible<T>(positions: &SortedPositionSet<T>, distance: T, count: PlacementCount) -> bool
where
    T: PrimInt,
{
    let k = count.get();
    greedy_scan(positions.as_slice(), distance, k, |_| {}) >= k
}

/// Returns the maximum number of items placeable at `distance`.
///
/// This is the full greedy count, without stopping at any target.
///
/// # Examples
///
/// ```rust
/// # use picket_model::positions::SortedPositionSet;
/// # use picket_search::feasibility::max_items_at;
/// let sorted = SortedPositionSet::try_from(vec![1, 2, 4, 8, 9]).unwrap();
/// assert_eq!(max_items_at(&sorted, 0), 5);
/// assert_eq!(max_items_at(&sorted, 3), 3);
/// assert_eq!(max_items_at(&sorted, 100), 1);
/// ```
pub fn max_items_at<T>(positions: &SortedPositionSet<T>, distance: T) -> usize
where
    T: PrimInt,
{
    greedy_scan(positions.as_slice(), distance, usize::MAX, |_| {})
}

/// Returns the first `count` positions taken by the greedy scan at `distance`,
/// or `None` if fewer than `count` items fit.
///
/// # Examples
///
/// ```rust
/// # use picket_model::positions::{PlacementCount, SortedPositionSet};
/// # use picket_search::feasibility::greedy_placement;
/// let sorted = SortedPositionSet::try_from(vec![1, 2, 4, 8, 9]).unwrap();
/// let k = PlacementCount::new(3);
/// assert_eq!(greedy_placement(&sorted, 3, k), Some(vec![1, 4, 8]));
/// assert_eq!(greedy_placement(&sorted, 4, k), None);
/// ```
pub fn greedy_placement<T>(
    positions: &SortedPositionSet<T>,
    distance: T,
    count: PlacementCount,
) -> Option<Vec<T>>
where
    T: PrimInt,
{
    let k = count.get();
    let mut selection = Vec::with_capacity(k.min(positions.len()));
    let taken = greedy_scan(positions.as_slice(), distance, k, |p| selection.push(p));
    (taken >= k).then_some(selection)
}
