use super::Reducer;

/// Extends [`Iterator`] with [`reduce_with()`](IteratorExt::reduce_with) for
/// working seamlessly with [`Reducer`]s.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Folds every remaining item of this iterator with `reducer` and returns
    /// the result.
    ///
    /// Pass the reducer by reference to keep using it afterwards.
    ///
    /// To use this method, import the [`IteratorExt`] trait.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use collect_algebra::{prelude::*, reducers};
    ///
    /// let to_set = reducers::to_set();
    /// let unique = [3, 1, 2, 1].into_iter().reduce_with(&to_set);
    /// assert_eq!(unique, HashSet::from([1, 2, 3]));
    ///
    /// let sorted = [3, 1, 2, 1].into_iter().reduce_with(reducers::to_sorted_list());
    /// assert_eq!(sorted, [1, 1, 2, 3]);
    /// ```
    #[inline]
    fn reduce_with<R>(self, reducer: R) -> R::Output
    where
        Self: Sized,
        R: Reducer<Item = Self::Item>,
    {
        reducer.reduce(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
