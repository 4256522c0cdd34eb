use std::{
    collections::{BTreeMap, HashMap},
    fmt::{self, Debug},
    hash::Hash,
    marker::PhantomData,
};

use crate::{
    container::Container,
    reducer::{Characteristics, Reducer},
};

/// A [`Reducer`] that inserts a key and a value computed from every item
/// into a map, a later value replacing an earlier one of the same key.
///
/// This `struct` is created by [`to_map()`] and [`to_sorted_map()`]. See
/// their documentation for more.
pub struct ToMap<M, T, KF, VF> {
    key_fn: KF,
    value_fn: VF,
    _marker: PhantomData<fn(T) -> M>,
}

/// Creates a [`Reducer`] that maps `key_fn(&item)` to `value_fn(item)` for
/// every item, in a `HashMap`.
///
/// Keys are unique: when two items produce equal keys, the value of the
/// later one wins. Combining two partitions follows the same rule, so the
/// right partition's value wins. Partitions must therefore be combined in
/// source order for the result to match a sequential reduction; an engine
/// merging them in arbitrary order gets an arbitrary winner.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use collect_algebra::{prelude::*, reducers};
///
/// let by_len = reducers::to_map(|word: &&str| word.len(), |word| word.to_uppercase());
/// let map = by_len.reduce(["a", "bb", "c"]);
///
/// assert_eq!(map, HashMap::from([(1, "C".to_owned()), (2, "BB".to_owned())]));
/// ```
#[inline]
pub const fn to_map<T, K, V, KF, VF>(key_fn: KF, value_fn: VF) -> ToMap<HashMap<K, V>, T, KF, VF>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    ToMap {
        key_fn,
        value_fn,
        _marker: PhantomData,
    }
}

/// Like [`to_map()`], in a `BTreeMap` ordered by key.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let squares = reducers::to_sorted_map(|n: &i32| *n, |n| n * n);
/// let map = squares.reduce([3, 1, 2]);
///
/// assert!(map.into_iter().eq([(1, 1), (2, 4), (3, 9)]));
/// ```
#[inline]
pub const fn to_sorted_map<T, K, V, KF, VF>(
    key_fn: KF,
    value_fn: VF,
) -> ToMap<BTreeMap<K, V>, T, KF, VF>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    ToMap {
        key_fn,
        value_fn,
        _marker: PhantomData,
    }
}

impl<M, T, K, V, KF, VF> Reducer for ToMap<M, T, KF, VF>
where
    M: Container<(K, V)> + Default,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    type Item = T;
    type Accumulator = M;
    type Output = M;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED.with_identity_finish()
    }

    #[inline]
    fn seed(&self) -> M {
        M::default()
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut M, item: T) {
        let key = (self.key_fn)(&item);
        Container::insert(accumulator, (key, (self.value_fn)(item)));
    }

    #[inline]
    fn combine(&self, mut left: M, right: M) -> M {
        left.insert_all(right);
        left
    }

    #[inline]
    fn finish(&self, accumulator: M) -> M {
        accumulator
    }
}

impl<M, T, KF: Clone, VF: Clone> Clone for ToMap<M, T, KF, VF> {
    fn clone(&self) -> Self {
        Self {
            key_fn: self.key_fn.clone(),
            value_fn: self.value_fn.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M, T, KF, VF> Debug for ToMap<M, T, KF, VF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToMap").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::prelude::*;
    use crate::reducers::*;

    #[test]
    fn last_write_wins() {
        let by_parity = to_map(|n: &i32| n % 2, |n| n);
        assert_eq!(
            by_parity.reduce([1, 2, 3, 4, 5]),
            HashMap::from([(1, 5), (0, 4)])
        );
    }

    #[test]
    fn right_partition_wins_on_combine() {
        let by_parity = to_map(|n: &i32| n % 2, |n| n);
        assert_eq!(
            by_parity.reduce_partitions([vec![1, 2, 3], vec![], vec![4, 5], vec![6]]),
            HashMap::from([(1, 5), (0, 6)])
        );
    }
}
