use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    fmt::{self, Debug},
    hash::{DefaultHasher, Hash, Hasher},
    ops::Deref,
};

use super::SortedSet;

/// A container that can no longer be mutated.
///
/// This is what [`Freeze::freeze()`](super::Freeze::freeze) produces and what
/// the reducers' [`frozen()`](crate::reducer::Reducer::frozen) variants finish
/// into. It derefs to the wrapped container, so every read-only method is
/// still available, but no `&mut` access is ever handed out.
///
/// A frozen [`HashSet`] is hashable (independently of iteration order),
/// which lets sets of sets such as [`PowerSet`](crate::set::PowerSet) exist.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::container::Freeze;
///
/// let frozen = HashSet::from([1, 2, 3]).freeze();
/// assert!(frozen.contains(&2));
/// assert_eq!(frozen.len(), 3);
///
/// let sets = HashSet::from([frozen.clone(), HashSet::from([3, 2, 1]).freeze()]);
/// assert_eq!(sets.len(), 1);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frozen<C>(C);

impl<C> Frozen<C> {
    /// Wraps `container` as is. Prefer [`Freeze::freeze()`](super::Freeze::freeze),
    /// which also compacts it.
    #[inline]
    pub const fn new(container: C) -> Self {
        Self(container)
    }

    /// Takes the container back out, making it mutable again.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C> Deref for Frozen<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C> AsRef<C> for Frozen<C> {
    #[inline]
    fn as_ref(&self) -> &C {
        &self.0
    }
}

impl<C: Debug> Debug for Frozen<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<C: IntoIterator> IntoIterator for Frozen<C> {
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a Frozen<C>
where
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = <&'a C as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

// Equal sets may iterate in different orders, so the element hashes are
// combined with a commutative operation. `DefaultHasher::new()` has fixed
// keys, unlike the set's own `BuildHasher`, which may be randomly seeded.
impl<T: Hash, S> Hash for Frozen<HashSet<T, S>> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .0
            .iter()
            .map(|item| {
                let mut hasher = DefaultHasher::new();
                item.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0_u64, u64::wrapping_add);

        state.write_usize(self.0.len());
        state.write_u64(combined);
    }
}

impl<T: Hash> Hash for Frozen<BTreeSet<T>> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Hash> Hash for Frozen<Vec<T>> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Hash> Hash for Frozen<VecDeque<T>> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Hash, C> Hash for Frozen<SortedSet<T, C>> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_slice().hash(state);
    }
}
