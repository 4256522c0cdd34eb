use std::{
    fmt::{self, Debug},
    iter,
};

use super::{Container, Freeze};
use crate::cmp::{Comparator, Natural};

/// A [`Bag`](super::Bag) kept in the order of a [`Comparator`].
///
/// Elements comparing equal share one entry whose count goes up; the entry
/// keeps the first of them that was inserted.
///
/// # Examples
///
/// ```
/// use collect_algebra::container::SortedBag;
///
/// let bag: SortedBag<_> = [3, 1, 3, 2, 3].into_iter().collect();
///
/// assert_eq!(bag.len(), 5);
/// assert_eq!(bag.occurrences_of(&3), 3);
/// assert_eq!(bag.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 3, 3]);
/// ```
#[derive(Clone)]
pub struct SortedBag<T, C = Natural> {
    entries: Vec<(T, usize)>,
    len: usize,
    comparator: C,
}

impl<T> SortedBag<T> {
    /// Creates an empty bag ordered by `T`'s natural order.
    #[inline]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> SortedBag<T, C> {
    /// Creates an empty bag ordered by `comparator`.
    #[inline]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            len: 0,
            comparator,
        }
    }

    /// Returns the total number of occurrences.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct elements.
    #[inline]
    pub fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over each distinct element with its occurrence count, in
    /// ascending order.
    #[inline]
    pub fn occurrences(&self) -> impl Iterator<Item = (&T, usize)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// Iterates over every occurrence in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries
            .iter()
            .flat_map(|(item, count)| iter::repeat_n(item, *count))
    }

    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> SortedBag<T, C>
where
    C: Comparator<T>,
{
    /// Builds a bag from elements in any order with one stable sort.
    pub fn from_unsorted(items: Vec<T>, comparator: C) -> Self {
        let len = items.len();
        let entries = items.into_iter().map(|item| (item, 1)).collect();
        let mut bag = Self {
            entries,
            len,
            comparator,
        };
        bag.normalize();
        bag
    }

    /// Sorts the entries and folds equal neighbours into the earlier one.
    fn normalize(&mut self) {
        let comparator = &self.comparator;
        self.entries.sort_by(|a, b| comparator.compare(&a.0, &b.0));
        self.entries.dedup_by(|later, earlier| {
            let is_equal = comparator.is_equal(&earlier.0, &later.0);
            if is_equal {
                earlier.1 += later.1;
            }
            is_equal
        });
    }

    #[inline]
    fn search(&self, item: &T) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(probe, _)| self.comparator.compare(probe, item))
    }

    /// Returns how many times `item` occurs, `0` if it does not.
    #[inline]
    pub fn occurrences_of(&self, item: &T) -> usize {
        self.search(item).map_or(0, |pos| self.entries[pos].1)
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_ok()
    }

    /// Adds `count` occurrences of `item`. Adding zero occurrences does nothing.
    pub fn add_occurrences(&mut self, item: T, count: usize) {
        if count == 0 {
            return;
        }

        match self.search(&item) {
            Ok(pos) => self.entries[pos].1 += count,
            Err(pos) => self.entries.insert(pos, (item, count)),
        }
        self.len += count;
    }
}

impl<T: Ord> Default for SortedBag<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, C> PartialEq for SortedBag<T, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq, C> Eq for SortedBag<T, C> {}

impl<T: Debug, C> Debug for SortedBag<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(item, count)| (item, count)))
            .finish()
    }
}

impl<T, C> Container<T> for SortedBag<T, C>
where
    C: Comparator<T>,
{
    #[inline]
    fn insert(&mut self, item: T) {
        self.add_occurrences(item, 1);
    }

    fn insert_all(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }

        self.entries.extend(other.entries);
        self.len += other.len;
        self.normalize();
    }
}

impl<T, C> Freeze for SortedBag<T, C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compact(&mut self) {
        self.entries.shrink_to_fit();
    }
}

impl<T: Ord> FromIterator<T> for SortedBag<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect(), Natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_counts() {
        let mut left: SortedBag<_> = [2, 1, 2].into_iter().collect();
        let right: SortedBag<_> = [3, 2].into_iter().collect();
        left.insert_all(right);

        assert_eq!(left.len(), 5);
        assert_eq!(
            left.occurrences().collect::<Vec<_>>(),
            [(&1, 1), (&2, 3), (&3, 1)]
        );
    }

    #[test]
    fn custom_order_keeps_first_representative() {
        let case_insensitive =
            |a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase());
        let mut bag = SortedBag::from_unsorted(vec!["b", "A", "a", "B"], case_insensitive);
        bag.add_occurrences("c", 2);
        Container::insert(&mut bag, "C");

        assert_eq!(bag.distinct_len(), 3);
        assert_eq!(
            bag.occurrences().collect::<Vec<_>>(),
            [(&"A", 2), (&"b", 2), (&"c", 3)]
        );
    }
}
