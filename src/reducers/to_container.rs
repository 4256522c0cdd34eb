use std::{
    collections::HashSet,
    fmt::{self, Debug},
    hash::Hash,
    marker::PhantomData,
};

use crate::{
    container::{Bag, Container},
    reducer::{Characteristics, Reducer},
};

/// A [`Reducer`] that inserts every item into a [`Container`] seeded with
/// [`Default`].
///
/// This `struct` is created by [`to_container()`], [`to_list()`],
/// [`to_set()`] and [`to_bag()`]. See their documentation for more.
pub struct ToContainer<C, T> {
    characteristics: Characteristics,
    _marker: PhantomData<fn(T) -> C>,
}

/// Reduces into a `Vec<T>`, in order, duplicates kept.
pub type ToList<T> = ToContainer<Vec<T>, T>;

/// Reduces into a `HashSet<T>`.
pub type ToSet<T> = ToContainer<HashSet<T>, T>;

/// Reduces into a [`Bag<T>`].
pub type ToBag<T> = ToContainer<Bag<T>, T>;

/// Creates a [`Reducer`] that inserts every item into a `C`.
///
/// What inserting means is up to the container, see [`Container`]. The
/// `characteristics` should say whether the container's content depends on
/// insertion order; the finisher is always the identity.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use collect_algebra::{prelude::*, reducer::Characteristics, reducers};
///
/// let to_btree_set = reducers::to_container::<BTreeSet<_>, _>(Characteristics::UNORDERED);
/// assert_eq!(to_btree_set.reduce([3, 1, 2, 1]), BTreeSet::from([1, 2, 3]));
/// ```
#[inline]
pub const fn to_container<C, T>(characteristics: Characteristics) -> ToContainer<C, T>
where
    C: Container<T> + Default,
{
    ToContainer {
        characteristics: characteristics.with_identity_finish(),
        _marker: PhantomData,
    }
}

/// Creates a [`Reducer`] that collects every item into a `Vec`, in order.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// assert_eq!(reducers::to_list().reduce([3, 1, 2, 1]), [3, 1, 2, 1]);
/// ```
#[inline]
pub const fn to_list<T>() -> ToList<T> {
    to_container(Characteristics::ORDERED)
}

/// Creates a [`Reducer`] that collects the distinct items into a `HashSet`.
///
/// An item equal to one already collected is ignored.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::{prelude::*, reducers};
///
/// assert_eq!(reducers::to_set().reduce([3, 1, 2, 1]), HashSet::from([1, 2, 3]));
/// ```
#[inline]
pub const fn to_set<T>() -> ToSet<T>
where
    T: Eq + Hash,
{
    to_container(Characteristics::UNORDERED)
}

/// Creates a [`Reducer`] that counts the occurrences of every item in a
/// [`Bag`].
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let bag = reducers::to_bag().reduce([3, 1, 2, 1]);
/// assert_eq!(bag.occurrences_of(&1), 2);
/// assert_eq!(bag.len(), 4);
/// ```
#[inline]
pub const fn to_bag<T>() -> ToBag<T>
where
    T: Eq + Hash,
{
    to_container(Characteristics::UNORDERED)
}

impl<C, T> Reducer for ToContainer<C, T>
where
    C: Container<T> + Default,
{
    type Item = T;
    type Accumulator = C;
    type Output = C;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }

    #[inline]
    fn seed(&self) -> C {
        C::default()
    }

    #[inline]
    fn accumulate(&self, accumulator: &mut C, item: T) {
        Container::insert(accumulator, item);
    }

    #[inline]
    fn combine(&self, mut left: C, right: C) -> C {
        left.insert_all(right);
        left
    }

    #[inline]
    fn finish(&self, accumulator: C) -> C {
        accumulator
    }

    #[inline]
    fn accumulate_many(&self, accumulator: &mut C, items: impl IntoIterator<Item = T>) {
        accumulator.insert_many(items);
    }
}

impl<C, T> Clone for ToContainer<C, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for ToContainer<C, T> {}

impl<C, T> Debug for ToContainer<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToContainer")
            .field("characteristics", &self.characteristics)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use crate::prelude::*;
    use crate::reducer::Characteristics;
    use crate::reducers::*;

    #[test]
    fn duplicates_collapse_into_set() {
        let set = to_set().reduce([3, 1, 2, 1]);
        assert_eq!(set.len(), 3);
        assert_eq!(set, HashSet::from([1, 2, 3]));
        assert!(to_set::<i32>().characteristics().is_unordered());
    }

    #[test]
    fn any_container_target() {
        let to_deque = to_container::<VecDeque<_>, _>(Characteristics::ORDERED);
        let deque = to_deque.reduce_partitions([vec!['a', 'b'], vec!['c']]);
        assert_eq!(deque, ['a', 'b', 'c']);
    }
}
