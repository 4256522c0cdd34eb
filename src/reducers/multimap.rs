use std::{
    collections::HashSet,
    convert,
    fmt::{self, Debug},
    hash::Hash,
    marker::PhantomData,
};

use crate::{
    container::{Bag, Container, Multimap},
    reducer::{Characteristics, Reducer},
};

/// A [`Reducer`] that groups a value computed from every item under a key
/// computed from it.
///
/// This `struct` is created by [`to_multimap()`] and the list, set and bag
/// shorthands. See their documentation for more.
pub struct ToMultimap<C, T, KF, VF> {
    key_fn: KF,
    value_fn: VF,
    characteristics: Characteristics,
    _marker: PhantomData<fn(T) -> C>,
}

/// The value function of the shorthands that group the items themselves.
pub type Identity<T> = fn(T) -> T;

/// Creates a [`Reducer`] that adds `value_fn(item)` to the group of
/// `key_fn(&item)` for every item, each group being a `C`.
///
/// Combining two partitions merges them key by key: a key present on both
/// sides gets the right partition's values added after the left's, and no
/// key's group is ever overwritten. The `characteristics` should say whether
/// a group's content depends on the order values were added.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use collect_algebra::{prelude::*, reducer::Characteristics, reducers};
///
/// let initials = reducers::to_multimap::<BTreeSet<_>, _, _, _, _, _>(
///     Characteristics::UNORDERED,
///     |word: &&str| word.len(),
///     |word| word.chars().next(),
/// );
/// let groups = initials.reduce(["ab", "cd", "ae", "xyz"]);
///
/// assert_eq!(groups.get(&2), Some(&BTreeSet::from([Some('a'), Some('c')])));
/// assert_eq!(groups.key_len(), 2);
/// ```
#[inline]
pub const fn to_multimap<C, T, K, V, KF, VF>(
    characteristics: Characteristics,
    key_fn: KF,
    value_fn: VF,
) -> ToMultimap<C, T, KF, VF>
where
    C: Container<V> + Default,
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    ToMultimap {
        key_fn,
        value_fn,
        characteristics: characteristics.with_identity_finish(),
        _marker: PhantomData,
    }
}

/// Creates a [`Reducer`] that groups the items by `key_fn`, in order,
/// duplicates kept.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let by_parity = reducers::to_list_multimap(|n: &i32| n % 2 == 0);
/// let groups = by_parity.reduce([1, 2, 3, 4, 5]);
///
/// assert_eq!(groups.get(&true), Some(&vec![2, 4]));
/// assert_eq!(groups.get(&false), Some(&vec![1, 3, 5]));
/// assert_eq!(groups.len(), 5);
/// ```
#[inline]
pub const fn to_list_multimap<T, K, KF>(key_fn: KF) -> ToMultimap<Vec<T>, T, KF, Identity<T>>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
{
    to_list_multimap_with(key_fn, convert::identity as Identity<T>)
}

/// Like [`to_list_multimap()`], grouping `value_fn(item)` instead of the
/// item itself.
#[inline]
pub const fn to_list_multimap_with<T, K, V, KF, VF>(
    key_fn: KF,
    value_fn: VF,
) -> ToMultimap<Vec<V>, T, KF, VF>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    to_multimap(Characteristics::ORDERED, key_fn, value_fn)
}

/// Creates a [`Reducer`] that groups the distinct items by `key_fn`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::{prelude::*, reducers};
///
/// let by_len = reducers::to_set_multimap(|word: &&str| word.len());
/// let groups = by_len.reduce(["to", "be", "or", "not", "to", "be"]);
///
/// assert_eq!(groups.get(&2), Some(&HashSet::from(["to", "be", "or"])));
/// assert_eq!(groups.len(), 4);
/// ```
#[inline]
pub const fn to_set_multimap<T, K, KF>(key_fn: KF) -> ToMultimap<HashSet<T>, T, KF, Identity<T>>
where
    T: Eq + Hash,
    K: Eq + Hash,
    KF: Fn(&T) -> K,
{
    to_set_multimap_with(key_fn, convert::identity as Identity<T>)
}

/// Like [`to_set_multimap()`], grouping `value_fn(item)` instead of the
/// item itself.
#[inline]
pub const fn to_set_multimap_with<T, K, V, KF, VF>(
    key_fn: KF,
    value_fn: VF,
) -> ToMultimap<HashSet<V>, T, KF, VF>
where
    K: Eq + Hash,
    V: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    to_multimap(Characteristics::UNORDERED, key_fn, value_fn)
}

/// Creates a [`Reducer`] that counts the items of every group in a [`Bag`].
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let by_initial = reducers::to_bag_multimap(|word: &&str| word.as_bytes()[0]);
/// let groups = by_initial.reduce(["ant", "ant", "bee", "asp"]);
///
/// assert_eq!(groups.get(&b'a').map(|bag| bag.occurrences_of(&"ant")), Some(2));
/// assert_eq!(groups.len(), 4);
/// ```
#[inline]
pub const fn to_bag_multimap<T, K, KF>(key_fn: KF) -> ToMultimap<Bag<T>, T, KF, Identity<T>>
where
    T: Eq + Hash,
    K: Eq + Hash,
    KF: Fn(&T) -> K,
{
    to_bag_multimap_with(key_fn, convert::identity as Identity<T>)
}

/// Like [`to_bag_multimap()`], counting `value_fn(item)` instead of the item
/// itself.
#[inline]
pub const fn to_bag_multimap_with<T, K, V, KF, VF>(
    key_fn: KF,
    value_fn: VF,
) -> ToMultimap<Bag<V>, T, KF, VF>
where
    K: Eq + Hash,
    V: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    to_multimap(Characteristics::UNORDERED, key_fn, value_fn)
}

impl<C, T, K, V, KF, VF> Reducer for ToMultimap<C, T, KF, VF>
where
    C: Container<V> + Default,
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    type Item = T;
    type Accumulator = Multimap<K, C>;
    type Output = Multimap<K, C>;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }

    #[inline]
    fn seed(&self) -> Self::Accumulator {
        Multimap::new()
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut Self::Accumulator, item: T) {
        let key = (self.key_fn)(&item);
        accumulator.put(key, (self.value_fn)(item));
    }

    #[inline]
    fn combine(&self, mut left: Self::Accumulator, right: Self::Accumulator) -> Self::Accumulator {
        left.insert_all(right);
        left
    }

    #[inline]
    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output {
        accumulator
    }
}

impl<C, T, KF: Clone, VF: Clone> Clone for ToMultimap<C, T, KF, VF> {
    fn clone(&self) -> Self {
        Self {
            key_fn: self.key_fn.clone(),
            value_fn: self.value_fn.clone(),
            characteristics: self.characteristics,
            _marker: PhantomData,
        }
    }
}

impl<C, T, KF, VF> Debug for ToMultimap<C, T, KF, VF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToMultimap")
            .field("characteristics", &self.characteristics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::reducers::*;

    #[test]
    fn combine_appends_per_key() {
        let by_initial = to_list_multimap_with(|word: &&str| word.as_bytes()[0], |word| word.len());
        let groups = by_initial.reduce_partitions([vec!["ab", "b"], vec!["abc", "cd"]]);

        assert_eq!(groups.get(&b'a'), Some(&vec![2, 3]));
        assert_eq!(groups.get(&b'b'), Some(&vec![1]));
        assert_eq!(groups.get(&b'c'), Some(&vec![2]));
        assert!(!groups.contains_key(&b'd'));
    }

    #[test]
    fn frozen_groups() {
        let frozen = to_set_multimap(|n: &u8| n % 3).frozen().reduce([1, 4, 4, 2]);
        assert_eq!(frozen.key_len(), 2);
        assert_eq!(frozen.len(), 3);
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::{HashMap, HashSet};

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::container::{ListMultimap, SetMultimap};
    use crate::reducers::*;
    use crate::test_utils::{BasicReducerTester, PredError, any_cuts};

    proptest! {
        #[test]
        fn all_reduce_methods_to_list_multimap(
            nums in propvec(any::<i16>(), ..16),
            cuts in any_cuts(),
        ) {
            all_reduce_methods_to_list_multimap_impl(nums, cuts)?;
        }

        #[test]
        fn all_reduce_methods_to_set_multimap(
            nums in propvec(0_u8..16, ..16),
            cuts in any_cuts(),
        ) {
            all_reduce_methods_to_set_multimap_impl(nums, cuts)?;
        }
    }

    fn all_reduce_methods_to_list_multimap_impl(nums: Vec<i16>, cuts: Vec<usize>) -> TestCaseResult {
        BasicReducerTester {
            iter_factory: || nums.iter().copied(),
            reducer: to_list_multimap(|num: &i16| num.rem_euclid(3)),
            cuts,
            pred: |iter, output: ListMultimap<i16, i16>| {
                let mut expected = HashMap::<_, Vec<_>>::new();
                for num in iter {
                    expected.entry(num.rem_euclid(3)).or_default().push(num);
                }
                if expected != output.into_map() {
                    Err(PredError::IncorrectOutput)
                } else {
                    Ok(())
                }
            },
        }
        .test_reducer()
    }

    fn all_reduce_methods_to_set_multimap_impl(nums: Vec<u8>, cuts: Vec<usize>) -> TestCaseResult {
        BasicReducerTester {
            iter_factory: || nums.iter().copied(),
            reducer: to_set_multimap_with(|num: &u8| num % 4, |num| num / 2),
            cuts,
            pred: |iter, output: SetMultimap<u8, u8>| {
                let mut expected = HashMap::<_, HashSet<_>>::new();
                for num in iter {
                    expected.entry(num % 4).or_default().insert(num / 2);
                }
                if expected != output.into_map() {
                    Err(PredError::IncorrectOutput)
                } else {
                    Ok(())
                }
            },
        }
        .test_reducer()
    }
}
