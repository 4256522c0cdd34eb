use std::{
    collections::{HashSet, hash_map::RandomState},
    hash::{BuildHasher, Hash},
};

use tracing::trace;

use super::{FiniteSet, union};
use crate::container::{Freeze, Frozen};

/// The set of all subsets of a set.
///
/// Members are [`Frozen`] because a set can only be a member of a
/// [`HashSet`] while it cannot change.
pub type PowerSet<T, S = RandomState> = HashSet<Frozen<HashSet<T, S>>>;

/// A [`PowerSet`] that is itself frozen.
pub type ImmutablePowerSet<T, S = RandomState> = Frozen<PowerSet<T, S>>;

/// Returns every subset of `set`, including the empty set and `set` itself.
///
/// The result has `2^n` members for an `n`-element set, so this is only
/// meant for small sets: 20 elements already produce over a million
/// subsets.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::{container::Freeze, set};
///
/// let subsets = set::power_set(&HashSet::from([1, 2]));
///
/// assert_eq!(subsets.len(), 4);
/// for expected in [vec![], vec![1], vec![2], vec![1, 2]] {
///     let expected: HashSet<_> = expected.into_iter().collect();
///     assert!(subsets.contains(&expected.freeze()));
/// }
/// ```
pub fn power_set<T, A>(set: &A) -> PowerSet<T>
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
{
    power_set_with_seed(set.iter(), set.len(), HashSet::new())
}

/// Like [`power_set()`], but every subset hashes with a clone of `set`'s
/// hasher.
pub fn power_set_with_hasher<T, S>(set: &HashSet<T, S>) -> PowerSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    power_set_with_seed(set.iter(), set.len(), HashSet::with_hasher(set.hasher().clone()))
}

/// Like [`power_set()`], with the outer family frozen as well.
#[inline]
pub fn immutable_power_set<T, A>(set: &A) -> ImmutablePowerSet<T>
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
{
    power_set(set).freeze()
}

// Starts from the family `{∅}` and, for each element `e`, unions the family
// with a copy of itself where `e` was added to every member. After `k`
// elements the family is exactly the subsets of those `k` elements.
fn power_set_with_seed<'a, T, S>(
    elements: impl Iterator<Item = &'a T>,
    len: usize,
    empty: HashSet<T, S>,
) -> PowerSet<T, S>
where
    T: Eq + Hash + Clone + 'a,
    S: BuildHasher + Clone,
{
    trace!(len, "generating power set");

    let seed: PowerSet<T, S> = HashSet::from([empty.freeze()]);
    let family = elements.fold(seed, |family, element| {
        let with_element: PowerSet<T, S> = family
            .iter()
            .map(|subset| {
                let mut subset = subset.clone().into_inner();
                subset.insert(element.clone());
                subset.freeze()
            })
            .collect();

        union(&family, &with_element)
    });

    trace!(len, subsets = family.len(), "generated power set");
    family
}
