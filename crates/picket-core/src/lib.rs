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

//! # Picket Core
//!
//! Foundational numerics, domain math, and search primitives for the Picket
//! spacing solver. This crate holds the building blocks that the model and
//! search crates share, with an emphasis on predictable integer semantics and
//! overflow-free bisection.
//!
//! ## Modules
//!
//! - `algorithm`: Monotone-predicate bisection over a closed integer domain
//!   (`last_satisfying`), the driver behind the optimal spacing search.
//! - `math`: Closed interval `[start, end]` primitives used to describe the
//!   candidate distance domain, with overflow-safe midpoints and the
//!   below/above halving used by binary search.
//! - `num`: Associated constant traits (`Zero`) for generic code.
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod math;
pub mod num;
