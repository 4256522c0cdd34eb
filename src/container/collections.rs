use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
    mem,
};

use super::{Container, Freeze, SortInPlace};
use crate::cmp::Comparator;

macro_rules! container_impl {
    (
        $name:ident<$($generic:ident),*>, $item_ty:ty,
        $item_pat:pat_param, $push_method_name:ident($($item_args:expr),*),
        merge: $merge:expr, compact: $compact:expr,
        $($gen_bound:ident: $bound:path),* $(,)?
    ) => {
        impl<$($generic),*> Container<$item_ty> for $name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn insert(&mut self, $item_pat: $item_ty) {
                // Sets and maps report whether the element was new. A duplicate is
                // still "accumulated", it just does not change the container.
                <$name<$($generic),*>>::$push_method_name(self, $($item_args),*);
            }

            #[inline]
            fn insert_all(&mut self, other: Self) {
                let merge = $merge;
                merge(self, other);
            }

            #[inline]
            fn insert_many(&mut self, items: impl IntoIterator<Item = $item_ty>) {
                self.extend(items);
            }
        }

        impl<$($generic),*> Freeze for $name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn compact(&mut self) {
                let compact = $compact;
                compact(self);
            }
        }
    };
}

container_impl!(
    Vec<T>, T,
    item, push(item),
    merge: |this: &mut Self, mut other: Self| this.append(&mut other),
    compact: |this: &mut Self| this.shrink_to_fit(),
);

container_impl!(
    VecDeque<T>, T,
    item, push_back(item),
    merge: |this: &mut Self, mut other: Self| this.append(&mut other),
    compact: |this: &mut Self| this.shrink_to_fit(),
);

container_impl!(
    HashSet<T, S>, T,
    item, insert(item),
    // Which side holds an element does not matter for a set, so extend the larger one.
    merge: |this: &mut Self, mut other: Self| {
        if other.len() > this.len() {
            mem::swap(this, &mut other);
        }
        this.extend(other);
    },
    compact: |this: &mut Self| this.shrink_to_fit(),
    T: Hash, T: Eq, S: BuildHasher,
);

container_impl!(
    BTreeSet<T>, T,
    item, insert(item),
    merge: |this: &mut Self, mut other: Self| this.append(&mut other),
    compact: |_: &mut Self| {},
    T: Ord,
);

// Maps are last-write-wins, so `other`'s values must overwrite `self`'s.
container_impl!(
    HashMap<K, V, S>, (K, V),
    (key, value), insert(key, value),
    merge: |this: &mut Self, other: Self| this.extend(other),
    compact: |this: &mut Self| this.shrink_to_fit(),
    K: Hash, K: Eq, S: BuildHasher,
);

container_impl!(
    BTreeMap<K, V>, (K, V),
    (key, value), insert(key, value),
    merge: |this: &mut Self, mut other: Self| this.append(&mut other),
    compact: |_: &mut Self| {},
    K: Ord,
);

impl<T> SortInPlace<T> for Vec<T> {
    #[inline]
    fn sort_in_place_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_by(|a, b| comparator.compare(a, b));
    }
}

impl<T> SortInPlace<T> for VecDeque<T> {
    #[inline]
    fn sort_in_place_by<C>(&mut self, comparator: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.make_contiguous()
            .sort_by(|a, b| comparator.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

    use crate::cmp::Natural;
    use crate::container::{Container, SortInPlace};

    #[test]
    fn list_merge_keeps_order() {
        let mut left = vec![3, 1];
        left.insert_all(vec![2, 1]);
        assert_eq!(left, [3, 1, 2, 1]);

        let mut left = VecDeque::from([1]);
        Container::insert(&mut left, 2);
        left.insert_all(VecDeque::from([0]));
        assert_eq!(left, [1, 2, 0]);
    }

    #[test]
    fn insert_through_the_trait() {
        let mut list = Vec::new();
        Container::insert(&mut list, 1);
        Container::insert(&mut list, 1);
        assert_eq!(list, [1, 1]);

        let mut set = HashSet::new();
        Container::insert(&mut set, 1);
        Container::insert(&mut set, 1);
        assert_eq!(set, HashSet::from([1]));

        let mut map = HashMap::new();
        Container::insert(&mut map, ('k', 1));
        Container::insert(&mut map, ('k', 2));
        assert_eq!(map, HashMap::from([('k', 2)]));
    }

    #[test]
    fn set_merge_collapses() {
        let mut left = HashSet::from([1, 2]);
        left.insert_all(HashSet::from([2, 3, 4, 5]));
        assert_eq!(left, HashSet::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn map_merge_is_last_write_wins() {
        let mut left = HashMap::from([("a", 1), ("b", 2)]);
        left.insert_all(HashMap::from([("b", 20), ("c", 30)]));
        assert_eq!(left, HashMap::from([("a", 1), ("b", 20), ("c", 30)]));

        let mut left = BTreeMap::from([("a", 1)]);
        Container::insert(&mut left, ("a", 2));
        left.insert_all(BTreeMap::from([("a", 3)]));
        assert_eq!(left, BTreeMap::from([("a", 3)]));
    }

    #[test]
    fn sort_in_place_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        pairs.sort_in_place_by(&|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        let mut deque = VecDeque::from([3, 1, 2]);
        deque.push_front(4);
        deque.sort_in_place_by(&Natural);
        assert_eq!(deque, [1, 2, 3, 4]);
    }
}
