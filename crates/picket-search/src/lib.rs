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

//! # Picket Search
//!
//! Optimal spacing search for maximum minimum distance placement.
//!
//! Given candidate positions on a line and a number `k` of items to place,
//! the search finds the largest distance `d` such that `k` positions can be
//! chosen with every pair at least `d` apart, together with one selection that
//! attains it.
//!
//! ## Modules
//!
//! - `feasibility`: The greedy feasibility scan. Decides in one linear pass
//!   whether `k` items fit at a candidate distance, and produces the witness
//!   selection.
//! - `search`: The bisection driver over the distance domain `[0, max - min]`,
//!   both as a plain function (`max_min_distance`) and as a monitored,
//!   configurable `SpacingSearch`.
//! - `monitor`: Observers for the search lifecycle (logging, tracing, fan-out).
//! - `stats`: Counters and timings collected during a search.
//! - `result`: The `SearchOutcome` returned by a monitored search.
//! - `num`: The `SpacingNumeric` bound collecting every integer capability the
//!   search needs.
//!
//! ## Usage
//!
//! ```rust
//! use picket_search::search::max_min_distance;
//!
//! assert_eq!(max_min_distance(&[1, 2, 8, 4, 9], 3), Ok(3));
//! assert!(max_min_distance(&[1, 2, 3], 4).is_err());
//! ```

pub mod feasibility;
pub mod monitor;
pub mod num;
pub mod result;
pub mod search;
pub mod stats;
