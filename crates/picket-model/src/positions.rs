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

//! Validated position sets and placement counts.
//!
//! `PositionSet` keeps the caller's coordinates in their original order and
//! guarantees the two structural invariants every search relies on: the set is
//! non-empty, and `max - min` is representable in the coordinate type. Sorting
//! produces a `SortedPositionSet`, the read-only view the feasibility scan and
//! the bisection operate on. Because every gap between sorted neighbours is
//! bounded by the span, no distance computed during a search can overflow once
//! these invariants hold.
//!
//! `PlacementCount` is the number of items to place. It is a separate type so
//! that `k = 0` is unrepresentable; the upper bound `k <= |positions|` depends
//! on the set and is checked by `PositionSet::placement_count`.

use crate::error::InputError;
use picket_core::math::interval::ClosedInterval;
use num_traits::PrimInt;
use std::num::NonZeroUsize;

/// The number of items to place. Always at least one.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PlacementCount(NonZeroUsize);

impl PlacementCount {
    /// Creates a new `PlacementCount`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    #[inline]
    pub fn new(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(count) => Self(count),
            None => panic!("called `PlacementCount::new` with a count of zero"),
        }
    }

    /// Creates a new `PlacementCount`, or `None` if `count` is zero.
    #[inline]
    pub fn try_new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    /// Returns the count as a plain `usize`.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl std::fmt::Display for PlacementCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlacementCount> for usize {
    #[inline]
    fn from(count: PlacementCount) -> Self {
        count.get()
    }
}

/// Computes `(min, max)` of a non-empty slice and checks that the span fits.
fn bounds_of<T>(positions: &[T]) -> Result<(T, T), InputError>
where
    T: PrimInt,
{
    let (&first, rest) = positions.split_first().ok_or(InputError::EmptyInput)?;
    let (min, max) = rest
        .iter()
        .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    if max.checked_sub(&min).is_none() {
        return Err(InputError::SpanOverflow);
    }
    Ok((min, max))
}

/// A validated, non-empty set of candidate positions in caller order.
///
/// Duplicates are permitted; coincident positions contribute a gap of zero.
///
/// # Examples
///
/// ```rust
/// # use picket_model::positions::PositionSet;
/// let set = PositionSet::new(vec![8, 1, 4, 9, 2]).unwrap();
/// assert_eq!(set.len(), 5);
/// assert_eq!(set.span(), 8);
/// assert_eq!(set.sorted().as_slice(), &[1, 2, 4, 8, 9]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionSet<T> {
    positions: Vec<T>,
    min: T,
    max: T,
}

impl<T> PositionSet<T>
where
    T: PrimInt,
{
    /// Creates a new `PositionSet`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyInput` if `positions` is empty and
    /// `InputError::SpanOverflow` if `max - min` does not fit in `T`.
    pub fn new(positions: Vec<T>) -> Result<Self, InputError> {
        let (min, max) = bounds_of(&positions)?;
        Ok(Self {
            positions,
            min,
            max,
        })
    }

    /// Creates a new `PositionSet` by copying a slice.
    ///
    /// # Errors
    ///
    /// See [`PositionSet::new`].
    #[inline]
    pub fn from_slice(positions: &[T]) -> Result<Self, InputError> {
        Self::new(positions.to_vec())
    }

    /// Returns the number of positions, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; a `PositionSet` is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the smallest position.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the largest position.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns `max - min`.
    #[inline]
    pub fn span(&self) -> T {
        // Checked in `new`.
        self.max - self.min
    }

    /// Returns the positions in caller order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.positions
    }

    /// Validates `count` against this set.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidCount` unless `1 <= count <= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_model::positions::PositionSet;
    /// # use picket_model::error::InputError;
    /// let set = PositionSet::new(vec![1, 5, 10]).unwrap();
    /// assert_eq!(set.placement_count(2).unwrap().get(), 2);
    /// assert_eq!(
    ///     set.placement_count(4),
    ///     Err(InputError::InvalidCount { requested: 4, available: 3 })
    /// );
    /// ```
    pub fn placement_count(&self, count: usize) -> Result<PlacementCount, InputError> {
        PlacementCount::try_new(count)
            .filter(|k| k.get() <= self.len())
            .ok_or(InputError::InvalidCount {
                requested: count,
                available: self.len(),
            })
    }

    /// Returns a sorted copy of the positions.
    #[inline]
    pub fn sorted(&self) -> SortedPositionSet<T> {
        self.clone().into_sorted()
    }

    /// Consumes the set and returns its positions sorted ascending.
    #[inline]
    pub fn into_sorted(self) -> SortedPositionSet<T> {
        let mut positions = self.positions;
        positions.sort_unstable();
        SortedPositionSet { positions }
    }
}

impl<T> TryFrom<Vec<T>> for PositionSet<T>
where
    T: PrimInt,
{
    type Error = InputError;

    #[inline]
    fn try_from(positions: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(positions)
    }
}

/// A non-empty set of positions sorted ascending, with a span that fits `T`.
///
/// Instances are obtained from [`PositionSet::sorted`] or
/// [`PositionSet::into_sorted`], or through `TryFrom<Vec<T>>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortedPositionSet<T> {
    positions: Vec<T>,
}

impl<T> SortedPositionSet<T>
where
    T: PrimInt,
{
    /// Returns the number of positions, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; a `SortedPositionSet` is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the smallest position.
    #[inline]
    pub fn first(&self) -> T {
        self.positions[0]
    }

    /// Returns the largest position.
    #[inline]
    pub fn last(&self) -> T {
        self.positions[self.positions.len() - 1]
    }

    /// Returns `last - first`.
    #[inline]
    pub fn span(&self) -> T {
        self.last() - self.first()
    }

    /// Returns the closed domain of candidate distances, `[0, span]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_model::positions::PositionSet;
    /// # use picket_core::math::interval::ClosedInterval;
    /// let sorted = PositionSet::new(vec![10, 1, 5]).unwrap().into_sorted();
    /// assert_eq!(sorted.distance_domain(), ClosedInterval::new(0, 9));
    /// ```
    #[inline]
    pub fn distance_domain(&self) -> ClosedInterval<T> {
        ClosedInterval::new(T::zero(), self.span())
    }

    /// Returns the smallest gap between consecutive positions, or `None` for a
    /// single position.
    pub fn min_gap(&self) -> Option<T> {
        self.positions.windows(2).map(|w| w[1] - w[0]).min()
    }

    /// Returns the positions in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.positions
    }

    /// Returns an iterator over the positions in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.positions.iter()
    }
}

impl<T> TryFrom<Vec<T>> for SortedPositionSet<T>
where
    T: PrimInt,
{
    type Error = InputError;

    #[inline]
    fn try_from(positions: Vec<T>) -> Result<Self, Self::Error> {
        PositionSet::new(positions).map(PositionSet::into_sorted)
    }
}

impl<T> From<PositionSet<T>> for SortedPositionSet<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(set: PositionSet<T>) -> Self {
        set.into_sorted()
    }
}

impl<'a, T> IntoIterator for &'a SortedPositionSet<T>
where
    T: PrimInt,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        let res = PositionSet::<i64>::new(vec![]);
        assert_eq!(res, Err(InputError::EmptyInput));
    }

    #[test]
    fn test_span_overflow_is_rejected() {
        let res = PositionSet::new(vec![i64::MIN, 0, i64::MAX]);
        assert_eq!(res, Err(InputError::SpanOverflow));
    }

    #[test]
    fn test_full_unsigned_span_is_accepted() {
        let set = PositionSet::new(vec![u32::MAX, 0]).unwrap();
        assert_eq!(set.span(), u32::MAX);
    }

    #[test]
    fn test_bounds_and_caller_order_preserved() {
        let set = PositionSet::new(vec![4, -3, 9, 9, 0]).unwrap();
        assert_eq!(set.min(), -3);
        assert_eq!(set.max(), 9);
        assert_eq!(set.span(), 12);
        assert_eq!(set.as_slice(), &[4, -3, 9, 9, 0]);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_sorted_view() {
        let sorted = PositionSet::new(vec![8, 1, 4, 9, 2]).unwrap().into_sorted();
        assert_eq!(sorted.as_slice(), &[1, 2, 4, 8, 9]);
        assert_eq!(sorted.first(), 1);
        assert_eq!(sorted.last(), 9);
        assert_eq!(sorted.span(), 8);
        assert_eq!(sorted.len(), 5);
        assert_eq!(sorted.min_gap(), Some(1));
    }

    #[test]
    fn test_min_gap_with_duplicates_and_single() {
        let sorted = SortedPositionSet::try_from(vec![3, 7, 3]).unwrap();
        assert_eq!(sorted.min_gap(), Some(0));

        let single = SortedPositionSet::try_from(vec![5]).unwrap();
        assert_eq!(single.min_gap(), None);
        assert_eq!(single.distance_domain(), ClosedInterval::point(0));
    }

    #[test]
    fn test_placement_count_bounds() {
        let set = PositionSet::new(vec![1, 2, 3]).unwrap();
        assert_eq!(set.placement_count(1).unwrap().get(), 1);
        assert_eq!(set.placement_count(3).unwrap().get(), 3);
        assert_eq!(
            set.placement_count(0),
            Err(InputError::InvalidCount {
                requested: 0,
                available: 3
            })
        );
        assert_eq!(
            set.placement_count(4),
            Err(InputError::InvalidCount {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_placement_count_constructors() {
        assert!(PlacementCount::try_new(0).is_none());
        assert_eq!(PlacementCount::try_new(3).map(usize::from), Some(3));
        assert_eq!(PlacementCount::new(2).to_string(), "2");
    }

    #[test]
    #[should_panic(expected = "count of zero")]
    fn test_placement_count_new_panics_on_zero() {
        let _ = PlacementCount::new(0);
    }

    #[test]
    fn test_sorted_iteration() {
        let sorted = SortedPositionSet::try_from(vec![3u8, 1, 2]).unwrap();
        let collected: Vec<u8> = (&sorted).into_iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
