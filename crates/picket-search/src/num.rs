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

//! # Spacing Numeric Trait
//!
//! Unified numeric bounds for search components. `SpacingNumeric` collects the
//! integer capabilities required by the feasibility scan and the bisection
//! driver into a single alias, simplifying generic signatures.
//!
//! ## Highlights
//!
//! - Requires `PrimInt` for ordering, subtraction, and shifts.
//! - Includes the `Zero` constant trait from `picket_core`, the fallback
//!   result of an empty bisection.
//! - `Send + Sync` so sorted position sets can be shared across batch workers.
//!
//! Every primitive integer type, signed or unsigned, satisfies the bound.

use std::hash::Hash;

use num_traits::PrimInt;
use picket_core::num::constants::Zero;

/// A trait alias for coordinate types that can be used in the spacing search.
pub trait SpacingNumeric:
    PrimInt
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + Send
    + Sync
    + Hash
{
}

impl<T> SpacingNumeric for T where
    T: PrimInt
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::SpacingNumeric;

    fn assert_spacing_numeric<T: SpacingNumeric>() {}

    #[test]
    fn test_all_primitive_integers_qualify() {
        assert_spacing_numeric::<i8>();
        assert_spacing_numeric::<i16>();
        assert_spacing_numeric::<i32>();
        assert_spacing_numeric::<i64>();
        assert_spacing_numeric::<i128>();
        assert_spacing_numeric::<isize>();
        assert_spacing_numeric::<u8>();
        assert_spacing_numeric::<u16>();
        assert_spacing_numeric::<u32>();
        assert_spacing_numeric::<u64>();
        assert_spacing_numeric::<u128>();
        assert_spacing_numeric::<usize>();
    }
}
