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

/// The error type for rejected search inputs.
///
/// All variants are detected synchronously before a search starts; a search
/// that has begun cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputError {
    /// The position set has zero elements.
    EmptyInput,
    /// The placement count is zero or exceeds the number of available positions.
    InvalidCount {
        /// The number of items the caller asked to place.
        requested: usize,
        /// The number of candidate positions.
        available: usize,
    },
    /// The distance between the smallest and the largest position does not
    /// fit into the coordinate type.
    SpanOverflow,
}

impl InputError {
    /// Returns `true` if this is an `InvalidCount` error.
    #[inline]
    pub fn is_invalid_count(&self) -> bool {
        matches!(self, Self::InvalidCount { .. })
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Position set must contain at least one position"),
            Self::InvalidCount {
                requested,
                available,
            } => write!(
                f,
                "Invalid placement count {}: must be between 1 and the number of positions ({})",
                requested, available
            ),
            Self::SpanOverflow => write!(
                f,
                "Distance between the smallest and largest position overflows the coordinate type"
            ),
        }
    }
}

impl std::error::Error for InputError {}
