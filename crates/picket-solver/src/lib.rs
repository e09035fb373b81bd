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

//! # Picket Solver
//!
//! Batched maximum minimum distance queries. One position set is sorted once
//! and shared by reference across scoped worker threads, each answering a
//! contiguous slice of the queried placement counts.
//!
//! ## Modules
//!
//! - `solver`: `BatchSolver` and its builder (thread count, logging).
//! - `result`: `BatchOutcome`, holding one result per query in query order,
//!   and the aggregated `BatchStatistics`.
//!
//! ## Motivation
//!
//! Answering many counts for the same positions repeats the sort for every
//! call of the plain search. The batch solver pays for it once, and since the
//! queries are independent it spreads them over the available cores.
//!
//! See `solver` for detailed APIs and examples.

pub mod result;
pub mod solver;
