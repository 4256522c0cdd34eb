use tracing::trace;

use super::{Characteristics, MapOutput, Reduction};
use crate::container::{Freeze, Frozen};

/// Folds a sequence of items into a result in four phases.
///
/// 1. [`seed()`](Reducer::seed) creates a fresh, empty accumulator.
/// 2. [`accumulate()`](Reducer::accumulate) integrates one item into an
///    accumulator, in place.
/// 3. [`combine()`](Reducer::combine) merges two accumulators built from
///    adjacent partitions of the input, the left one holding the earlier
///    items.
/// 4. [`finish()`](Reducer::finish) turns the accumulator into the result.
///
/// The reducer itself is never mutated. Every accumulator is owned by
/// exactly one reduction until it is moved into `combine` or `finish`, so
/// partitions never share state.
///
/// # Implementing
///
/// `combine` must be associative, and combining the accumulators of two
/// partitions must give the same result as accumulating both partitions in
/// sequence. If the result does not depend on item order, declare it with
/// [`Characteristics::UNORDERED`]; then `combine` must also be commutative
/// up to the result's equality.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducer::Characteristics};
///
/// /// Sums the lengths of strings.
/// struct TotalLen;
///
/// impl Reducer for TotalLen {
///     type Item = &'static str;
///     type Accumulator = usize;
///     type Output = usize;
///
///     fn characteristics(&self) -> Characteristics {
///         Characteristics::UNORDERED.with_identity_finish()
///     }
///
///     fn seed(&self) -> usize {
///         0
///     }
///
///     fn accumulate(&self, total: &mut usize, item: &'static str) {
///         *total += item.len();
///     }
///
///     fn combine(&self, left: usize, right: usize) -> usize {
///         left + right
///     }
///
///     fn finish(&self, total: usize) -> usize {
///         total
///     }
/// }
///
/// assert_eq!(TotalLen.reduce(["ab", "c", ""]), 3);
/// assert_eq!(TotalLen.reduce_partitions([vec!["ab"], vec![], vec!["c"]]), 3);
/// ```
pub trait Reducer {
    /// Type of items this reducer folds.
    type Item;

    /// The mutable intermediate state of one reduction.
    type Accumulator;

    /// The result [`finish()`](Reducer::finish) produces.
    type Output;

    /// Returns whether the result depends on item order, and whether the
    /// finisher is the identity.
    fn characteristics(&self) -> Characteristics;

    /// Creates a fresh accumulator.
    ///
    /// Called once per reduction, and once per partition of a partitioned one.
    fn seed(&self) -> Self::Accumulator;

    /// Integrates one item into `accumulator`.
    fn accumulate(&self, accumulator: &mut Self::Accumulator, item: Self::Item);

    /// Merges the accumulators of two adjacent partitions, `left` holding the
    /// earlier items.
    fn combine(&self, left: Self::Accumulator, right: Self::Accumulator) -> Self::Accumulator;

    /// Turns a completed accumulator into the result.
    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output;

    /// Integrates every item of `items`, in order.
    #[inline]
    fn accumulate_many(
        &self,
        accumulator: &mut Self::Accumulator,
        items: impl IntoIterator<Item = Self::Item>,
    ) where
        Self: Sized,
    {
        items
            .into_iter()
            .for_each(|item| self.accumulate(accumulator, item));
    }

    /// Starts a [`Reduction`] that is fed items one by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_algebra::{prelude::*, reducers};
    ///
    /// let to_list = reducers::to_list();
    /// let mut reduction = to_list.reduction();
    /// reduction.accumulate(1);
    /// reduction.extend([2, 3]);
    ///
    /// assert_eq!(reduction.finish(), [1, 2, 3]);
    /// ```
    #[inline]
    fn reduction(&self) -> Reduction<'_, Self>
    where
        Self: Sized,
    {
        Reduction::new(self)
    }

    /// Folds every item of `items` in one pass and returns the result.
    #[inline]
    fn reduce(&self, items: impl IntoIterator<Item = Self::Item>) -> Self::Output
    where
        Self: Sized,
    {
        let mut accumulator = self.seed();
        self.accumulate_many(&mut accumulator, items);
        self.finish(accumulator)
    }

    /// Reduces each partition into its own accumulator, combines them left to
    /// right and finishes the result.
    ///
    /// Partitions are expected in source order. This is the sequential
    /// rendition of what a parallel engine does with the same reducer, and
    /// gives the same result as [`reduce()`](Reducer::reduce) over the
    /// partitions' concatenation. No partitions at all finish the seed.
    fn reduce_partitions<P>(&self, partitions: impl IntoIterator<Item = P>) -> Self::Output
    where
        Self: Sized,
        P: IntoIterator<Item = Self::Item>,
    {
        let mut count = 0_usize;
        let combined = partitions
            .into_iter()
            .map(|partition| {
                count += 1;
                let mut accumulator = self.seed();
                self.accumulate_many(&mut accumulator, partition);
                accumulator
            })
            .reduce(|left, right| self.combine(left, right));

        trace!(partitions = count, "combined partitions");
        self.finish(combined.unwrap_or_else(|| self.seed()))
    }

    /// Creates a reducer that transforms the result with `f` after finishing.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_algebra::{prelude::*, reducers};
    ///
    /// let count_distinct = reducers::to_set().map_output(|set| set.len());
    /// assert_eq!(count_distinct.reduce([3, 1, 2, 1]), 3);
    /// ```
    #[inline]
    fn map_output<F, T>(self, f: F) -> MapOutput<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        MapOutput::new(self, f)
    }

    /// Creates a reducer that finishes into a read-only [`Frozen`] result.
    ///
    /// # Examples
    ///
    /// ```
    /// use collect_algebra::{prelude::*, reducers};
    ///
    /// let frozen = reducers::to_set().frozen().reduce([3, 1, 2, 1]);
    /// assert_eq!(frozen.len(), 3);
    /// ```
    #[inline]
    #[allow(clippy::type_complexity)]
    fn frozen(self) -> MapOutput<Self, fn(Self::Output) -> Frozen<Self::Output>>
    where
        Self: Sized,
        Self::Output: Freeze,
    {
        MapOutput::new(self, <Self::Output as Freeze>::freeze as fn(_) -> _)
    }
}

impl<R> Reducer for &R
where
    R: Reducer + ?Sized,
{
    type Item = R::Item;
    type Accumulator = R::Accumulator;
    type Output = R::Output;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        R::characteristics(self)
    }

    #[inline]
    fn seed(&self) -> Self::Accumulator {
        R::seed(self)
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut Self::Accumulator, item: Self::Item) {
        R::accumulate(self, accumulator, item);
    }

    #[inline]
    fn combine(&self, left: Self::Accumulator, right: Self::Accumulator) -> Self::Accumulator {
        R::combine(self, left, right)
    }

    #[inline]
    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output {
        R::finish(self, accumulator)
    }
}
