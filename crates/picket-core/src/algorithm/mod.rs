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

use crate::math::interval::ClosedInterval;
use num_traits::PrimInt;

/// Finds the largest value in `domain` for which `predicate` holds.
///
/// Returns `None` if the predicate holds for no value of the domain.
///
/// The predicate must be monotone non-increasing over the domain: if it holds
/// for `v`, it must hold for every `u <= v` in the domain. Under that
/// condition the result is exact and the predicate is evaluated at most
/// `ceil(log2(width + 1)) + 1` times. The probes are issued in bisection order,
/// always at the overflow-safe midpoint of the remaining window.
///
/// # Examples
///
/// ```rust
/// # use picket_core::algorithm::last_satisfying;
/// # use picket_core::math::interval::ClosedInterval;
/// let domain = ClosedInterval::new(0, 100);
/// assert_eq!(last_satisfying(domain, |v| v * v <= 50), Some(7));
/// assert_eq!(last_satisfying(domain, |v| v < 0), None);
/// ```
pub fn last_satisfying<T, P>(domain: ClosedInterval<T>, mut predicate: P) -> Option<T>
where
    T: PrimInt,
    P: FnMut(T) -> bool,
{
    let mut best = None;
    let mut remaining = Some(domain);

    while let Some(window) = remaining {
        let mid = window.midpoint();
        debug_assert!(
            domain.contains_point(mid),
            "`last_satisfying` probed a value outside of its domain"
        );

        if predicate(mid) {
            best = Some(mid);
            remaining = window.above(mid);
        } else {
            remaining = window.below(mid);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_threshold_anywhere_in_domain() {
        let domain = ClosedInterval::new(0i64, 64);
        for threshold in 0..=64 {
            assert_eq!(
                last_satisfying(domain, |v| v <= threshold),
                Some(threshold),
                "threshold {}",
                threshold
            );
        }
    }

    #[test]
    fn test_always_true_returns_end() {
        let domain = ClosedInterval::new(3u32, 1000);
        assert_eq!(last_satisfying(domain, |_| true), Some(1000));
    }

    #[test]
    fn test_never_true_returns_none() {
        let domain = ClosedInterval::new(3u32, 1000);
        assert_eq!(last_satisfying(domain, |_| false), None);
    }

    #[test]
    fn test_single_point_domain() {
        let domain = ClosedInterval::point(0u8);
        let mut probes = Vec::new();
        let best = last_satisfying(domain, |v| {
            probes.push(v);
            true
        });
        assert_eq!(best, Some(0));
        assert_eq!(probes, vec![0]);
    }

    #[test]
    fn test_full_unsigned_range_terminates() {
        let domain = ClosedInterval::new(0u64, u64::MAX);
        assert_eq!(last_satisfying(domain, |_| true), Some(u64::MAX));
        assert_eq!(last_satisfying(domain, |v| v == 0), Some(0));
    }

    #[test]
    fn test_full_signed_range_terminates() {
        let domain = ClosedInterval::new(i32::MIN, i32::MAX);
        assert_eq!(last_satisfying(domain, |v| v <= -17), Some(-17));
        assert_eq!(last_satisfying(domain, |_| true), Some(i32::MAX));
        assert_eq!(last_satisfying(domain, |v| v == i32::MIN), Some(i32::MIN));
    }

    #[test]
    fn test_probe_count_is_logarithmic() {
        let domain = ClosedInterval::new(0u32, 1 << 20);
        let mut probes = 0u32;
        let _ = last_satisfying(domain, |v| {
            probes += 1;
            v <= 12345
        });
        assert!(probes <= 22, "too many probes: {}", probes);
    }

    #[test]
    fn test_random_thresholds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let start: i32 = rng.random_range(-1000..1000);
            let end: i32 = rng.random_range(start..start + 2000);
            let threshold: i32 = rng.random_range(start - 10..=end + 10);
            let domain = ClosedInterval::new(start, end);

            let expected = if threshold < start {
                None
            } else {
                Some(threshold.min(end))
            };
            assert_eq!(last_satisfying(domain, |v| v <= threshold), expected);
        }
    }
}
