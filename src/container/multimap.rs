use std::{
    collections::{
        HashMap, HashSet,
        hash_map::{self, Entry, RandomState},
    },
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
};

use super::{Bag, Container, Freeze};

/// A map from each key to a group of values, the group being any
/// [`Container`].
///
/// The group type decides what "adding a value" means: a `Vec` keeps every
/// value in insertion order, a `HashSet` collapses duplicates, a [`Bag`]
/// counts them. [`ListMultimap`], [`SetMultimap`] and [`BagMultimap`] name
/// those three.
///
/// A key is present only while it has a group, and groups are only ever
/// created by inserting a value, so no group is empty.
///
/// # Examples
///
/// ```
/// use collect_algebra::container::ListMultimap;
///
/// let mut by_len = ListMultimap::new();
/// for word in ["a", "bb", "c", "dd", "a"] {
///     by_len.put(word.len(), word);
/// }
///
/// assert_eq!(by_len.key_len(), 2);
/// assert_eq!(by_len.len(), 5);
/// assert_eq!(by_len.get(&1).map(Vec::as_slice), Some(&["a", "c", "a"][..]));
/// ```
#[derive(Clone)]
pub struct Multimap<K, C, S = RandomState> {
    groups: HashMap<K, C, S>,
}

/// Groups values in insertion order.
pub type ListMultimap<K, V, S = RandomState> = Multimap<K, Vec<V>, S>;

/// Groups values with duplicates collapsed.
pub type SetMultimap<K, V, S = RandomState> = Multimap<K, HashSet<V>, S>;

/// Groups values with occurrence counts.
pub type BagMultimap<K, V, S = RandomState> = Multimap<K, Bag<V>, S>;

impl<K, C> Multimap<K, C> {
    /// Creates an empty multimap.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, C, S> Multimap<K, C, S> {
    /// Creates an empty multimap hashing keys with `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            groups: HashMap::with_hasher(hasher),
        }
    }

    /// Returns the number of distinct keys.
    #[inline]
    pub fn key_len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, C> {
        self.groups.keys()
    }

    /// Iterates over every key with its group, in no particular order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, C> {
        self.groups.iter()
    }

    /// Unwraps into the underlying map of groups.
    #[inline]
    pub fn into_map(self) -> HashMap<K, C, S> {
        self.groups
    }
}

impl<K, C, S> Multimap<K, C, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns the group of `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&C> {
        self.groups.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Adds `value` to the group of `key`, creating the group if needed.
    pub fn put<V>(&mut self, key: K, value: V)
    where
        C: Container<V> + Default,
    {
        self.groups.entry(key).or_default().insert(value);
    }
}

impl<K, V, S> Multimap<K, Vec<V>, S> {
    /// Returns the total number of values across every group.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<K, V, S> Multimap<K, HashSet<V>, S> {
    /// Returns the total number of values across every group.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.values().map(HashSet::len).sum()
    }
}

impl<K, V, S> Multimap<K, Bag<V>, S> {
    /// Returns the total number of occurrences across every group.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.values().map(Bag::len).sum()
    }
}

impl<K, C, S: Default> Default for Multimap<K, C, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, C, S> PartialEq for Multimap<K, C, S>
where
    K: Eq + Hash,
    C: PartialEq,
    S: BuildHasher,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K, C, S> Eq for Multimap<K, C, S>
where
    K: Eq + Hash,
    C: Eq,
    S: BuildHasher,
{
}

impl<K: Debug, C: Debug, S> Debug for Multimap<K, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.groups.iter()).finish()
    }
}

impl<K, V, C, S> Container<(K, V)> for Multimap<K, C, S>
where
    K: Eq + Hash,
    C: Container<V> + Default,
    S: BuildHasher,
{
    #[inline]
    fn insert(&mut self, (key, value): (K, V)) {
        self.put(key, value);
    }

    /// Merges group by group: values of `other` land after `self`'s values of
    /// the same key.
    fn insert_all(&mut self, other: Self) {
        for (key, group) in other.groups {
            match self.groups.entry(key) {
                Entry::Occupied(mut entry) => entry.get_mut().insert_all(group),
                Entry::Vacant(entry) => {
                    entry.insert(group);
                }
            }
        }
    }
}

impl<K, C, S> Freeze for Multimap<K, C, S>
where
    K: Eq + Hash,
    C: Freeze,
    S: BuildHasher,
{
    fn compact(&mut self) {
        self.groups.values_mut().for_each(C::compact);
        self.groups.shrink_to_fit();
    }
}

impl<'a, K, C, S> IntoIterator for &'a Multimap<K, C, S> {
    type Item = (&'a K, &'a C);
    type IntoIter = hash_map::Iter<'a, K, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<K, C, S> IntoIterator for Multimap<K, C, S> {
    type Item = (K, C);
    type IntoIter = hash_map::IntoIter<K, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn merge_appends_per_key() {
        let mut left = ListMultimap::new();
        left.put('a', 1);
        left.put('b', 2);

        let mut right = ListMultimap::new();
        right.put('a', 3);
        right.put('c', 4);

        left.insert_all(right);

        assert_eq!(left.get(&'a'), Some(&vec![1, 3]));
        assert_eq!(left.get(&'b'), Some(&vec![2]));
        assert_eq!(left.get(&'c'), Some(&vec![4]));
        assert_eq!(left.key_len(), 3);
        assert_eq!(left.len(), 4);
    }

    #[test]
    fn group_shape_decides_duplicates() {
        let mut sets = SetMultimap::new();
        let mut bags = BagMultimap::new();
        for (key, value) in [(1, 'x'), (1, 'x'), (1, 'y')] {
            sets.put(key, value);
            bags.put(key, value);
        }

        assert_eq!(sets.get(&1), Some(&HashSet::from(['x', 'y'])));
        assert_eq!(sets.len(), 2);
        assert_eq!(bags.get(&1).map(|bag| bag.occurrences_of(&'x')), Some(2));
        assert_eq!(bags.len(), 3);
        assert!(!bags.contains_key(&2));
    }
}
