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

use num_traits::PrimInt;
use std::ops::{Bound, RangeBounds, RangeInclusive};

/// A closed interval `[start, end]` over a primitive integer type.
///
/// Both bounds are part of the interval. This matches the candidate distance
/// domain of a spacing search, which is `[0, max - min]` with both ends
/// admissible answers.
///
/// # Invariants
///
/// `start` must always be less than or equal to `end`; an empty closed
/// interval is not representable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.start(), 0);
    /// assert_eq!(iv.end(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid interval: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedInterval` if `start <= end`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// assert!(ClosedInterval::try_new(3, 3).is_some());
    /// assert!(ClosedInterval::try_new(4, 3).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates the single-point interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `value` lies in `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `end - start`, or `None` if the difference does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(-5i8, 5).width(), Some(10));
    /// assert_eq!(ClosedInterval::new(i8::MIN, i8::MAX).width(), None);
    /// ```
    #[inline]
    pub fn width(&self) -> Option<T> {
        self.end.checked_sub(&self.start)
    }

    /// Returns the midpoint of the interval, rounded towards negative infinity.
    ///
    /// Never overflows, including for intervals spanning the full range of `T`.
    /// For non-negative bounds this equals `start + (end - start) / 2`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(0, 9).midpoint(), 4);
    /// assert_eq!(ClosedInterval::new(250u8, 254).midpoint(), 252);
    /// assert_eq!(ClosedInterval::new(i64::MIN, i64::MAX).midpoint(), -1);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        let one = T::one();
        (self.start >> 1) + (self.end >> 1) + (self.start & self.end & one)
    }

    /// Returns the part of the interval strictly below `value`, i.e.
    /// `[start, value - 1]`.
    ///
    /// Returns `None` if no point of the interval lies below `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.below(4), Some(ClosedInterval::new(0, 3)));
    /// assert_eq!(iv.below(0), None);
    /// ```
    #[inline]
    pub fn below(&self, value: T) -> Option<Self> {
        if value <= self.start {
            return None;
        }
        let end = value.checked_sub(&T::one())?;
        Some(Self {
            start: self.start,
            end: end.min(self.end),
        })
    }

    /// Returns the part of the interval strictly above `value`, i.e.
    /// `[value + 1, end]`.
    ///
    /// Returns `None` if no point of the interval lies above `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use picket_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.above(4), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(iv.above(10), None);
    /// ```
    #[inline]
    pub fn above(&self, value: T) -> Option<Self> {
        if value >= self.end {
            return None;
        }
        let start = value.checked_add(&T::one())?;
        Some(Self {
            start: start.max(self.start),
            end: self.end,
        })
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> RangeBounds<T> for ClosedInterval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.end)
    }
}

impl<T> From<RangeInclusive<T>> for ClosedInterval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start..=iv.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(10, 20);
        assert_eq!(iv.start(), 10);
        assert_eq!(iv.end(), 20);
        assert_eq!(iv.width(), Some(10));
    }

    #[test]
    fn test_point_interval() {
        let iv = ClosedInterval::point(7u32);
        assert_eq!(iv.start(), iv.end());
        assert_eq!(iv.width(), Some(0));
        assert!(iv.contains_point(7));
        assert_eq!(iv.midpoint(), 7);
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_midpoint_matches_low_plus_half_width() {
        for start in 0i32..20 {
            for end in start..40 {
                let iv = ClosedInterval::new(start, end);
                assert_eq!(iv.midpoint(), start + (end - start) / 2);
            }
        }
    }

    #[test]
    fn test_midpoint_extremes() {
        // Naive `(start + end) / 2` would overflow in all of these.
        assert_eq!(ClosedInterval::new(u64::MAX - 1, u64::MAX).midpoint(), u64::MAX - 1);
        assert_eq!(ClosedInterval::new(i8::MIN, i8::MAX).midpoint(), -1);
        assert_eq!(ClosedInterval::new(i8::MIN, i8::MIN + 1).midpoint(), i8::MIN);
        assert_eq!(ClosedInterval::new(-7i16, -4).midpoint(), -6);
    }

    #[test]
    fn test_below_and_above_partition() {
        let iv = ClosedInterval::new(0, 10);
        let mid = iv.midpoint();
        let lower = iv.below(mid).unwrap();
        let upper = iv.above(mid).unwrap();
        assert_eq!(lower, ClosedInterval::new(0, 4));
        assert_eq!(upper, ClosedInterval::new(6, 10));
    }

    #[test]
    fn test_below_and_above_at_type_bounds() {
        let iv = ClosedInterval::new(0u8, u8::MAX);
        assert_eq!(iv.below(0), None);
        assert_eq!(iv.above(u8::MAX), None);
        assert_eq!(iv.above(254), Some(ClosedInterval::point(u8::MAX)));
    }

    #[test]
    fn test_below_and_above_outside_interval() {
        let iv = ClosedInterval::new(5, 10);
        // Values beyond the interval clamp to the interval itself.
        assert_eq!(iv.below(20), Some(iv));
        assert_eq!(iv.above(0), Some(iv));
        assert_eq!(iv.below(5), None);
        assert_eq!(iv.above(10), None);
    }

    #[test]
    fn test_traits_display_debug() {
        let iv = ClosedInterval::new(1, 9);
        assert_eq!(format!("{}", iv), "[1, 9]");
        assert_eq!(format!("{:?}", iv), "ClosedInterval { start: 1, end: 9 }");
    }

    #[test]
    fn test_range_conversions() {
        let iv = ClosedInterval::from(3..=8);
        assert_eq!(iv.start(), 3);
        assert_eq!(iv.end(), 8);
        let range: RangeInclusive<i32> = iv.into();
        assert_eq!(range, 3..=8);
        assert!(iv.contains(&8));
        assert!(!iv.contains(&9));
    }
}
