use std::{
    fmt::{self, Debug},
    slice, vec,
};

use super::{Container, Freeze};
use crate::cmp::{Comparator, Natural};

/// A set kept in the order of a [`Comparator`].
///
/// Uniqueness is decided by the comparator, not by [`PartialEq`]: two
/// elements comparing [`Equal`](std::cmp::Ordering::Equal) are the same
/// element as far as this set is concerned, and only the first one inserted
/// is kept. Iteration follows the comparator's order.
///
/// Elements live in a sorted `Vec`, so lookups are `O(log n)` and single
/// inserts are `O(n)`. Bulk construction through [`from_unsorted()`] sorts
/// once, which is what the sorted-set reducers do.
///
/// [`from_unsorted()`]: SortedSet::from_unsorted
///
/// # Examples
///
/// ```
/// use collect_algebra::container::SortedSet;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let set = SortedSet::from_unsorted(vec!["ccc", "a", "bb", "dd"], by_len);
///
/// // "dd" has the same length as "bb", which came first.
/// assert_eq!(set.as_slice(), ["a", "bb", "ccc"]);
/// assert!(set.contains(&"xx"));
/// ```
#[derive(Clone)]
pub struct SortedSet<T, C = Natural> {
    items: Vec<T>,
    comparator: C,
}

impl<T> SortedSet<T> {
    /// Creates an empty set ordered by `T`'s natural order.
    #[inline]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> SortedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            items: Vec::new(),
            comparator,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the smallest element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the largest element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the elements in ascending order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, C> SortedSet<T, C>
where
    C: Comparator<T>,
{
    /// Builds a set from elements in any order with one stable sort.
    ///
    /// Of several elements comparing equal, the one earliest in `items` is kept.
    pub fn from_unsorted(mut items: Vec<T>, comparator: C) -> Self {
        items.sort_by(|a, b| comparator.compare(a, b));
        // `dedup_by` hands over (later, earlier) and drops the later one.
        items.dedup_by(|later, earlier| comparator.is_equal(earlier, later));
        Self { items, comparator }
    }

    #[inline]
    fn search(&self, item: &T) -> Result<usize, usize> {
        self.items
            .binary_search_by(|probe| self.comparator.compare(probe, item))
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_ok()
    }

    /// Inserts `item` unless an equal element is present.
    ///
    /// Returns whether it was inserted.
    pub fn insert(&mut self, item: T) -> bool {
        match self.search(&item) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, item);
                true
            }
        }
    }

    /// Removes the element equal to `item`. Returns whether there was one.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.search(item) {
            Ok(pos) => {
                self.items.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Keeps only the elements `f` returns `true` for.
    #[inline]
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.items.retain(f);
    }
}

impl<T: Ord> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, C> PartialEq for SortedSet<T, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, C> Eq for SortedSet<T, C> {}

impl<T: Debug, C> Debug for SortedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}

impl<T, C> Container<T> for SortedSet<T, C>
where
    C: Comparator<T>,
{
    #[inline]
    fn insert(&mut self, item: T) {
        let _ = SortedSet::insert(self, item);
    }

    fn insert_all(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }

        // Appending after our own elements lets the stable sort keep ours
        // whenever both sides hold equal elements.
        let mut items = std::mem::take(&mut self.items);
        items.extend(other.items);
        items.sort_by(|a, b| self.comparator.compare(a, b));
        items.dedup_by(|later, earlier| self.comparator.is_equal(earlier, later));
        self.items = items;
    }
}

impl<T, C> Freeze for SortedSet<T, C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compact(&mut self) {
        self.items.shrink_to_fit();
    }
}

impl<T, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect(), Natural)
    }
}
