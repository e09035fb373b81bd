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

//! # Picket Model
//!
//! **The domain model for maximum minimum distance placement.**
//!
//! Given candidate positions on a line and a number of items to place, the
//! solver looks for the largest distance `d` such that the items can occupy
//! distinct candidate positions with every pair at least `d` apart. This crate
//! holds the validated inputs and the result value exchanged with the search
//! crate.
//!
//! ## Architecture
//!
//! * **`error`**: The `InputError` taxonomy. Every invalid input is rejected
//!   here, before any search work begins.
//! * **`positions`**: `PositionSet` (validated, caller order), `SortedPositionSet`
//!   (ascending, owned by one search), and `PlacementCount` (`k >= 1`).
//! * **`placement`**: `Placement`, the optimal distance together with a witness
//!   selection of positions attaining it.
//! * **`loading`**: `InstanceLoader`, a whitespace-token reader for the
//!   `N K p_1 .. p_N` text format, single or multi-case.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Constructors validate eagerly. A `SortedPositionSet` is
//!     never empty and its span always fits the coordinate type, so the search
//!     never has to handle a malformed input.
//! 2.  **No Shared State**: All values are plain owned data. Nothing persists
//!     between searches.

pub mod error;
pub mod loading;
pub mod placement;
pub mod positions;
