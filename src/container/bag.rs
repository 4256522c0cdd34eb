use std::{
    collections::{HashMap, hash_map::RandomState},
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
    iter,
};

use super::{Container, Freeze};

/// An unordered collection that counts how many times each element occurs.
///
/// Unlike a set, inserting an element equal to one already present is not a
/// no-op: it increments that element's occurrence count. Only the first
/// inserted of several equal elements is stored.
///
/// # Examples
///
/// ```
/// use collect_algebra::container::Bag;
///
/// let bag: Bag<_> = ["a", "b", "a"].into_iter().collect();
///
/// assert_eq!(bag.len(), 3);
/// assert_eq!(bag.distinct_len(), 2);
/// assert_eq!(bag.occurrences_of(&"a"), 2);
/// assert_eq!(bag.occurrences_of(&"z"), 0);
/// ```
#[derive(Clone)]
pub struct Bag<T, S = RandomState> {
    counts: HashMap<T, usize, S>,
    len: usize,
}

impl<T> Bag<T> {
    /// Creates an empty bag.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<T, S> Bag<T, S> {
    /// Creates an empty bag hashing elements with `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
            len: 0,
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
        self.counts.len()
    }

    /// Iterates over each distinct element with its occurrence count, in no
    /// particular order.
    #[inline]
    pub fn occurrences(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// Iterates over every occurrence; an element occurring `n` times is
    /// yielded `n` times in a row.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.counts
            .iter()
            .flat_map(|(item, &count)| iter::repeat_n(item, count))
    }
}

impl<T, S> Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Returns how many times `item` occurs, `0` if it does not.
    #[inline]
    pub fn occurrences_of(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.counts.contains_key(item)
    }

    /// Adds `count` occurrences of `item`. Adding zero occurrences does nothing.
    pub fn add_occurrences(&mut self, item: T, count: usize) {
        if count == 0 {
            return;
        }

        *self.counts.entry(item).or_insert(0) += count;
        self.len += count;
    }
}

impl<T, S: Default> Default for Bag<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> PartialEq for Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T, S> Eq for Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: Debug, S> Debug for Bag<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

impl<T, S> Container<T> for Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn insert(&mut self, item: T) {
        self.add_occurrences(item, 1);
    }

    fn insert_all(&mut self, other: Self) {
        for (item, count) in other.counts {
            self.add_occurrences(item, count);
        }
    }
}

impl<T, S> Freeze for Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn compact(&mut self) {
        self.counts.shrink_to_fit();
    }
}

impl<T, S> Extend<T> for Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<T, S> FromIterator<T> for Bag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::default();
        bag.extend(iter);
        bag
    }
}
