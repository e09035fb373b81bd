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

/// The result of a spacing search.
///
/// Holds the achieved minimum distance and a witness: the positions selected
/// at that distance, in ascending order. Every consecutive pair of selected
/// positions is at least `distance` apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement<T> {
    /// The minimum pairwise distance of the placement.
    distance: T,

    /// The selected positions, ascending.
    positions: Vec<T>,
}

impl<T> Placement<T>
where
    T: PrimInt,
{
    /// Constructs a new `Placement`.
    ///
    /// # Panics
    ///
    /// Panics if `positions` is empty. In debug builds, also panics if
    /// `positions` is not sorted ascending or two consecutive positions are
    /// closer than `distance`.
    pub fn new(distance: T, positions: Vec<T>) -> Self {
        assert!(
            !positions.is_empty(),
            "called `Placement::new` with an empty selection"
        );
        debug_assert!(
            positions
                .windows(2)
                .all(|w| w[0] <= w[1] && w[1] - w[0] >= distance),
            "called `Placement::new` with a selection that violates the minimum distance"
        );

        Self {
            distance,
            positions,
        }
    }

    /// Returns the minimum pairwise distance.
    #[inline]
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Returns the selected positions, ascending.
    #[inline]
    pub fn positions(&self) -> &[T] {
        &self.positions
    }

    /// Returns the number of placed items.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.positions.len()
    }

    /// Returns the smallest gap actually realised by the selection, or `None`
    /// for a single item. Always `>= self.distance()`.
    pub fn realised_gap(&self) -> Option<T> {
        self.positions.windows(2).map(|w| w[1] - w[0]).min()
    }
}

impl<T> std::fmt::Display for Placement<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Placement Summary")?;
        writeln!(f, "   Minimum Distance: {}", self.distance)?;
        writeln!(f)?;

        writeln!(f, "   {:<10} | {:<14} | {:<10}", "Item", "Position", "Gap")?;
        writeln!(f, "   {:-<10}-+-{:-<14}-+-{:-<10}", "", "", "")?;
        for (i, &position) in self.positions.iter().enumerate() {
            match i.checked_sub(1).map(|prev| position - self.positions[prev]) {
                Some(gap) => writeln!(f, "   {:<10} | {:<14} | {:<10}", i, position, gap)?,
                None => writeln!(f, "   {:<10} | {:<14} | {:<10}", i, position, "-")?,
            }
        }

        Ok(())
    }
}
