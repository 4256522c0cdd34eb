use std::fmt::{self, Debug};

use super::Reducer;

/// One running reduction: a reducer paired with the accumulator it seeded.
///
/// This `struct` is created by [`Reducer::reduction()`]. It is the piece a
/// parallel engine hands to each worker: fed independently, then merged with
/// [`combine()`](Reduction::combine) in partition order.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let joining = reducers::joining("[", ", ", "]");
///
/// let mut left = joining.reduction();
/// left.extend([1, 2]);
/// let mut right = joining.reduction();
/// right.accumulate(3);
///
/// assert_eq!(left.combine(right).finish(), "[1, 2, 3]");
/// ```
pub struct Reduction<'r, R>
where
    R: Reducer,
{
    reducer: &'r R,
    accumulator: R::Accumulator,
}

impl<'r, R> Reduction<'r, R>
where
    R: Reducer,
{
    pub(super) fn new(reducer: &'r R) -> Self {
        Self {
            reducer,
            accumulator: reducer.seed(),
        }
    }

    /// Integrates one item.
    #[inline]
    pub fn accumulate(&mut self, item: R::Item) {
        self.reducer.accumulate(&mut self.accumulator, item);
    }

    /// Merges `later`, a reduction over items that came after this one's.
    #[inline]
    pub fn combine(self, later: Self) -> Self {
        Self {
            reducer: self.reducer,
            accumulator: self.reducer.combine(self.accumulator, later.accumulator),
        }
    }

    /// Returns the state accumulated so far.
    #[inline]
    pub fn accumulator(&self) -> &R::Accumulator {
        &self.accumulator
    }

    /// Finishes the reduction.
    #[inline]
    pub fn finish(self) -> R::Output {
        self.reducer.finish(self.accumulator)
    }
}

impl<R> Extend<R::Item> for Reduction<'_, R>
where
    R: Reducer,
{
    #[inline]
    fn extend<I: IntoIterator<Item = R::Item>>(&mut self, items: I) {
        self.reducer.accumulate_many(&mut self.accumulator, items);
    }
}

impl<R> Debug for Reduction<'_, R>
where
    R: Reducer,
    R::Accumulator: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reduction")
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::reducers;

    #[test]
    fn combine_keeps_partition_order() {
        let to_list = reducers::to_list();

        let mut first = to_list.reduction();
        first.extend(0..3);
        let mut second = to_list.reduction();
        second.extend(3..5);
        let third = to_list.reduction();

        let merged = first.combine(second).combine(third);
        assert_eq!(merged.accumulator(), &[0, 1, 2, 3, 4]);
        assert_eq!(merged.finish(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn untouched_reduction_finishes_seed() {
        let to_sorted = reducers::to_sorted_list::<u8>();
        assert!(to_sorted.reduction().finish().is_empty());
    }
}
