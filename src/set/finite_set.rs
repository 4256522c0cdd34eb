use std::{
    collections::{BTreeSet, HashSet, btree_set, hash_set},
    hash::{BuildHasher, Hash},
    slice,
};

use crate::{
    cmp::Comparator,
    container::{Container, Frozen, SortedSet},
};

/// Read access to a finite collection of unique elements.
///
/// This is everything the set algebra needs from an operand. `contains`
/// should be cheap (hashing or binary search), since most operations call it
/// once per element of the other operand.
pub trait FiniteSet<T> {
    /// Borrowing iterator over the elements, in the set's own order.
    ///
    /// It must be [`Clone`] so that it can be restarted, which the lazy
    /// [`cartesian_product()`](super::cartesian_product) relies on.
    type Iter<'a>: Iterator<Item = &'a T> + Clone
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &T) -> bool;

    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if every element of `items` is in this set.
    #[inline]
    fn contains_all<'a>(&self, items: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }
}

/// A set the `*_into` operations can write their result into.
pub trait MutableSet<T>: FiniteSet<T> + Container<T> {
    /// Removes `item`. Returns whether it was present.
    fn remove(&mut self, item: &T) -> bool;

    /// Keeps only the elements `f` returns `true` for.
    fn retain(&mut self, f: impl FnMut(&T) -> bool);
}

impl<T, S> FiniteSet<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }
}

impl<T, S> MutableSet<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    #[inline]
    fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        HashSet::retain(self, f);
    }
}

impl<T: Ord> FiniteSet<T> for BTreeSet<T> {
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        BTreeSet::iter(self)
    }
}

impl<T: Ord> MutableSet<T> for BTreeSet<T> {
    #[inline]
    fn remove(&mut self, item: &T) -> bool {
        BTreeSet::remove(self, item)
    }

    #[inline]
    fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        BTreeSet::retain(self, f);
    }
}

impl<T, C> FiniteSet<T> for SortedSet<T, C>
where
    C: Comparator<T>,
{
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        SortedSet::len(self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        SortedSet::contains(self, item)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        SortedSet::iter(self)
    }
}

impl<T, C> MutableSet<T> for SortedSet<T, C>
where
    C: Comparator<T>,
{
    #[inline]
    fn remove(&mut self, item: &T) -> bool {
        SortedSet::remove(self, item)
    }

    #[inline]
    fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        SortedSet::retain(self, f);
    }
}

impl<T, S> FiniteSet<T> for Frozen<S>
where
    S: FiniteSet<T>,
{
    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        FiniteSet::len(&**self)
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        FiniteSet::contains(&**self, item)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        FiniteSet::iter(&**self)
    }
}
