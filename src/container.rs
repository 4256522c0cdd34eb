//! The container capability the reducers and the set algebra build on.
//!
//! Reducers never touch a concrete collection directly. They only need to
//! insert one element, merge another container of the same shape, and
//! optionally freeze the result; that surface is [`Container`] and
//! [`Freeze`]. Sorting finishers additionally need [`SortInPlace`].
//!
//! The std collections implement these traits. This module also provides the
//! containers std lacks and the catalog needs: [`Bag`], [`SortedSet`],
//! [`SortedBag`] and [`Multimap`], plus the read-only [`Frozen`] wrapper
//! every container freezes into.
//!
//! Note that several std collections have inherent methods named `insert`, so
//! on a concrete `Vec` or `HashSet` call [`Container::insert`] with the fully
//! qualified syntax.

mod bag;
mod collections;
mod frozen;
mod multimap;
mod sorted_bag;
mod sorted_set;

pub use bag::*;
pub use frozen::*;
pub use multimap::*;
pub use sorted_bag::*;
pub use sorted_set::*;

use crate::cmp::Comparator;

/// A mutable container elements can be accumulated into.
///
/// Implementations define what "insert" means for their shape: a list
/// appends, a set ignores an element equal to one it holds, a bag counts it,
/// a map overwrites the value of an existing key.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::container::Container;
///
/// let mut left = HashSet::new();
/// Container::insert(&mut left, 1);
/// Container::insert(&mut left, 1);
///
/// let mut right = HashSet::new();
/// right.insert_many([1, 2]);
///
/// left.insert_all(right);
/// assert_eq!(left, HashSet::from([1, 2]));
/// ```
pub trait Container<T>: Freeze {
    /// Inserts one element.
    fn insert(&mut self, item: T);

    /// Moves every element of `other` into `self`, as if each had been
    /// inserted after the elements already in `self`.
    fn insert_all(&mut self, other: Self);

    /// Inserts every element of `items`, in order.
    #[inline]
    fn insert_many(&mut self, items: impl IntoIterator<Item = T>) {
        items.into_iter().for_each(|item| self.insert(item));
    }
}

/// A container that can be turned into its read-only [`Frozen`] form.
pub trait Freeze: Sized {
    /// Releases spare capacity. Called once, right before freezing.
    ///
    /// The default does nothing.
    #[inline]
    fn compact(&mut self) {}

    /// Compacts the container and wraps it in [`Frozen`].
    #[inline]
    fn freeze(mut self) -> Frozen<Self> {
        self.compact();
        Frozen::new(self)
    }
}

/// A sequence container that can be sorted after the fact.
pub trait SortInPlace<T> {
    /// Sorts the container by `comparator`.
    ///
    /// The sort is stable: equal elements keep their relative order.
    fn sort_in_place_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized;
}
