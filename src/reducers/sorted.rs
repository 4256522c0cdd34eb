use std::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::{
    ConfigError,
    cmp::{ByKey, Comparator, Natural},
    container::{Container, SortInPlace, SortedBag, SortedSet},
    reducer::{Characteristics, Reducer},
};

/// A sorted result that can be built from elements in any order with a
/// single sort.
pub trait FromUnsorted<T, C>: Sized {
    /// Builds the result from `items`, in accumulation order.
    fn from_unsorted(items: Vec<T>, comparator: &C) -> Self;
}

impl<T, C> FromUnsorted<T, C> for Vec<T>
where
    C: Comparator<T>,
{
    #[inline]
    fn from_unsorted(mut items: Vec<T>, comparator: &C) -> Self {
        items.sort_in_place_by(comparator);
        items
    }
}

impl<T, C> FromUnsorted<T, C> for SortedSet<T, C>
where
    C: Comparator<T> + Clone,
{
    #[inline]
    fn from_unsorted(items: Vec<T>, comparator: &C) -> Self {
        SortedSet::from_unsorted(items, comparator.clone())
    }
}

impl<T, C> FromUnsorted<T, C> for SortedBag<T, C>
where
    C: Comparator<T> + Clone,
{
    #[inline]
    fn from_unsorted(items: Vec<T>, comparator: &C) -> Self {
        SortedBag::from_unsorted(items, comparator.clone())
    }
}

/// A [`Reducer`] that gathers items unsorted and sorts them once, in the
/// finisher.
///
/// Accumulating and combining only append, so neither side of a combine is
/// assumed to be sorted. The sort is stable: among elements the comparator
/// considers equal, the one accumulated first comes first, or is the one
/// kept by a set.
///
/// This `struct` is created by the `to_sorted_*` functions of this module.
pub struct ToSorted<O, T, C> {
    comparator: C,
    _marker: PhantomData<fn(T) -> O>,
}

/// Reduces into a sorted `Vec<T>`.
pub type ToSortedList<T, C = Natural> = ToSorted<Vec<T>, T, C>;

/// Reduces into a [`SortedSet<T, C>`].
pub type ToSortedSet<T, C = Natural> = ToSorted<SortedSet<T, C>, T, C>;

/// Reduces into a [`SortedBag<T, C>`].
pub type ToSortedBag<T, C = Natural> = ToSorted<SortedBag<T, C>, T, C>;

impl<O, T, C> ToSorted<O, T, C> {
    #[inline]
    const fn new(comparator: C) -> Self {
        Self {
            comparator,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn try_new(comparator: Option<C>, target: &'static str) -> Result<Self, ConfigError> {
        comparator
            .map(Self::new)
            .ok_or(ConfigError::MissingOrdering { target })
    }

    /// Returns the comparator the result is sorted by.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<O, T, C> Reducer for ToSorted<O, T, C>
where
    O: FromUnsorted<T, C>,
{
    type Item = T;
    type Accumulator = Vec<T>;
    type Output = O;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED
    }

    #[inline]
    fn seed(&self) -> Vec<T> {
        Vec::new()
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut Vec<T>, item: T) {
        accumulator.push(item);
    }

    #[inline]
    fn combine(&self, mut left: Vec<T>, right: Vec<T>) -> Vec<T> {
        left.insert_all(right);
        left
    }

    #[inline]
    fn finish(&self, accumulator: Vec<T>) -> O {
        O::from_unsorted(accumulator, &self.comparator)
    }

    #[inline]
    fn accumulate_many(&self, accumulator: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
        accumulator.extend(items);
    }
}

impl<O, T, C: Clone> Clone for ToSorted<O, T, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.comparator.clone())
    }
}

impl<O, T, C: Debug> Debug for ToSorted<O, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToSorted")
            .field("comparator", &self.comparator)
            .finish()
    }
}

/// Creates a [`Reducer`] that collects every item into a `Vec` sorted by the
/// items' natural order. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// assert_eq!(reducers::to_sorted_list().reduce([3, 1, 2, 1]), [1, 1, 2, 3]);
/// ```
#[inline]
pub const fn to_sorted_list<T: Ord>() -> ToSortedList<T> {
    ToSorted::new(Natural)
}

/// Like [`to_sorted_list()`], sorted by `comparator`.
#[inline]
pub const fn to_sorted_list_by<T, C>(comparator: C) -> ToSortedList<T, C>
where
    C: Comparator<T>,
{
    ToSorted::new(comparator)
}

/// Like [`to_sorted_list()`], sorted by the natural order of `key_fn`'s
/// result.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let by_len = reducers::to_sorted_list_by_key(|word: &&str| word.len());
/// assert_eq!(by_len.reduce(["ccc", "a", "bb", "d"]), ["a", "d", "bb", "ccc"]);
/// ```
#[inline]
pub const fn to_sorted_list_by_key<T, K, F>(key_fn: F) -> ToSortedList<T, ByKey<F>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    ToSorted::new(ByKey::new(key_fn))
}

/// Like [`to_sorted_list_by()`], for when the comparator is optional
/// configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingOrdering`] if `comparator` is `None`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use collect_algebra::{ConfigError, reducers};
///
/// let configured: Option<fn(&f64, &f64) -> Ordering> = None;
/// assert_eq!(
///     reducers::try_to_sorted_list_by::<f64, _>(configured).unwrap_err(),
///     ConfigError::MissingOrdering { target: "sorted list" },
/// );
/// ```
#[inline]
pub fn try_to_sorted_list_by<T, C>(comparator: Option<C>) -> Result<ToSortedList<T, C>, ConfigError>
where
    C: Comparator<T>,
{
    ToSorted::try_new(comparator, "sorted list")
}

/// Creates a [`Reducer`] that collects the items into a [`SortedSet`] in
/// their natural order.
///
/// Of several equal items, the first one accumulated is kept.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let set = reducers::to_sorted_set().reduce([3, 1, 2, 1]);
/// assert_eq!(set.as_slice(), [1, 2, 3]);
/// ```
#[inline]
pub const fn to_sorted_set<T: Ord>() -> ToSortedSet<T> {
    ToSorted::new(Natural)
}

/// Like [`to_sorted_set()`], ordered by `comparator`. Items the comparator
/// considers equal are duplicates.
#[inline]
pub const fn to_sorted_set_by<T, C>(comparator: C) -> ToSortedSet<T, C>
where
    C: Comparator<T> + Clone,
{
    ToSorted::new(comparator)
}

/// Like [`to_sorted_set()`], ordered by the natural order of `key_fn`'s
/// result. Items with equal keys are duplicates.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let by_initial = reducers::to_sorted_set_by_key(|word: &&str| word.chars().next());
/// let set = by_initial.reduce(["bob", "alice", "bill", "anna"]);
/// assert_eq!(set.as_slice(), ["alice", "bob"]);
/// ```
#[inline]
pub const fn to_sorted_set_by_key<T, K, F>(key_fn: F) -> ToSortedSet<T, ByKey<F>>
where
    K: Ord,
    F: Fn(&T) -> K + Clone,
{
    ToSorted::new(ByKey::new(key_fn))
}

/// Like [`to_sorted_set_by()`], for when the comparator is optional
/// configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingOrdering`] if `comparator` is `None`.
#[inline]
pub fn try_to_sorted_set_by<T, C>(comparator: Option<C>) -> Result<ToSortedSet<T, C>, ConfigError>
where
    C: Comparator<T> + Clone,
{
    ToSorted::try_new(comparator, "sorted set")
}

/// Creates a [`Reducer`] that counts the items in a [`SortedBag`] in their
/// natural order.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let bag = reducers::to_sorted_bag().reduce(["b", "a", "b"]);
/// assert_eq!(bag.occurrences().collect::<Vec<_>>(), [(&"a", 1), (&"b", 2)]);
/// ```
#[inline]
pub const fn to_sorted_bag<T: Ord>() -> ToSortedBag<T> {
    ToSorted::new(Natural)
}

/// Like [`to_sorted_bag()`], ordered by `comparator`.
#[inline]
pub const fn to_sorted_bag_by<T, C>(comparator: C) -> ToSortedBag<T, C>
where
    C: Comparator<T> + Clone,
{
    ToSorted::new(comparator)
}

/// Like [`to_sorted_bag()`], ordered by the natural order of `key_fn`'s
/// result.
#[inline]
pub const fn to_sorted_bag_by_key<T, K, F>(key_fn: F) -> ToSortedBag<T, ByKey<F>>
where
    K: Ord,
    F: Fn(&T) -> K + Clone,
{
    ToSorted::new(ByKey::new(key_fn))
}

/// Like [`to_sorted_bag_by()`], for when the comparator is optional
/// configuration.
///
/// # Errors
///
/// Returns [`ConfigError::MissingOrdering`] if `comparator` is `None`.
#[inline]
pub fn try_to_sorted_bag_by<T, C>(comparator: Option<C>) -> Result<ToSortedBag<T, C>, ConfigError>
where
    C: Comparator<T> + Clone,
{
    ToSorted::try_new(comparator, "sorted bag")
}
