use std::{collections::HashSet, hash::Hash};

use super::{FiniteSet, MutableSet};

/// Returns every element of `a` or `b`, each exactly once.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::set;
///
/// let union = set::union(&HashSet::from([1, 2]), &HashSet::from([2, 3]));
/// assert_eq!(union, HashSet::from([1, 2, 3]));
/// ```
#[inline]
pub fn union<T, A, B>(a: &A, b: &B) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
{
    union_into(a, b, HashSet::with_capacity(a.len().max(b.len())))
}

/// Inserts every element of `a`, then every element of `b`, into `target`
/// and returns it. The target's own uniqueness collapses duplicates.
#[inline]
pub fn union_into<T, A, B, R>(a: &A, b: &B, mut target: R) -> R
where
    T: Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
    R: MutableSet<T>,
{
    target.insert_many(a.iter().cloned());
    target.insert_many(b.iter().cloned());
    target
}

/// Returns the elements present in both `a` and `b`.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeSet, HashSet};
/// use collect_algebra::set;
///
/// let both = set::intersect(&HashSet::from([1, 2, 3]), &BTreeSet::from([2, 3, 4]));
/// assert_eq!(both, HashSet::from([2, 3]));
/// ```
#[inline]
pub fn intersect<T, A, B>(a: &A, b: &B) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
{
    intersect_into(a, b, HashSet::with_capacity(a.len().min(b.len())))
}

/// Inserts every element of `a` into `target`, then keeps only the elements
/// of `target` that are also in `b`.
///
/// Elements `target` held beforehand go through the same filter.
pub fn intersect_into<T, A, B, R>(a: &A, b: &B, mut target: R) -> R
where
    T: Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
    R: MutableSet<T>,
{
    target.insert_many(a.iter().cloned());
    target.retain(|item| b.contains(item));
    target
}

/// Returns the elements of `minuend` that are not in `subtrahend`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::set;
///
/// let a = HashSet::from([1, 2, 3]);
/// let b = HashSet::from([2]);
/// assert_eq!(set::difference(&a, &b), HashSet::from([1, 3]));
/// assert_eq!(set::difference(&b, &a), HashSet::new());
/// ```
#[inline]
pub fn difference<T, A, B>(minuend: &A, subtrahend: &B) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
{
    difference_into(minuend, subtrahend, HashSet::with_capacity(minuend.len()))
}

/// Inserts every element of `minuend` into `target`, then removes every
/// element of `subtrahend` from it.
///
/// Elements `target` held beforehand are removed too if they are in
/// `subtrahend`.
pub fn difference_into<T, A, B, R>(minuend: &A, subtrahend: &B, mut target: R) -> R
where
    T: Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
    R: MutableSet<T>,
{
    target.insert_many(minuend.iter().cloned());
    for item in subtrahend.iter() {
        target.remove(item);
    }
    target
}

/// Returns the elements in exactly one of `a` and `b`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::set;
///
/// let either = set::symmetric_difference(&HashSet::from([1, 2]), &HashSet::from([2, 3]));
/// assert_eq!(either, HashSet::from([1, 3]));
/// ```
#[inline]
pub fn symmetric_difference<T, A, B>(a: &A, b: &B) -> HashSet<T>
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
{
    symmetric_difference_into(a, b, HashSet::new())
}

/// Inserts the union of `a - b` and `b - a` into `target` and returns it.
pub fn symmetric_difference_into<T, A, B, R>(a: &A, b: &B, target: R) -> R
where
    T: Eq + Hash + Clone,
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
    R: MutableSet<T>,
{
    union_into(&difference(a, b), &difference(b, a), target)
}

/// Returns `true` if every element of `candidate_subset` is in
/// `candidate_superset`.
///
/// A set larger than the candidate superset is rejected without looking at
/// any element.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::set;
///
/// let a = HashSet::from([1, 2]);
/// assert!(set::is_subset_of(&a, &a));
/// assert!(set::is_subset_of(&a, &HashSet::from([1, 2, 3])));
/// assert!(!set::is_subset_of(&a, &HashSet::from([1, 3])));
/// ```
#[inline]
pub fn is_subset_of<T, A, B>(candidate_subset: &A, candidate_superset: &B) -> bool
where
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
{
    candidate_subset.len() <= candidate_superset.len()
        && candidate_superset.contains_all(candidate_subset.iter())
}

/// Returns `true` if `candidate_subset` is a subset of `candidate_superset`
/// and strictly smaller, i.e. the two are not equal.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use collect_algebra::set;
///
/// let a = HashSet::from([1, 2]);
/// assert!(!set::is_proper_subset_of(&a, &a));
/// assert!(set::is_proper_subset_of(&a, &HashSet::from([1, 2, 3])));
/// ```
#[inline]
pub fn is_proper_subset_of<T, A, B>(candidate_subset: &A, candidate_superset: &B) -> bool
where
    A: FiniteSet<T> + ?Sized,
    B: FiniteSet<T> + ?Sized,
{
    candidate_subset.len() < candidate_superset.len()
        && candidate_superset.contains_all(candidate_subset.iter())
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use crate::container::{Freeze, SortedSet};
    use crate::set::*;

    #[test]
    fn scenarios() {
        let a = HashSet::from([1, 2]);
        let b = HashSet::from([2, 3]);
        assert_eq!(union(&a, &b), HashSet::from([1, 2, 3]));
        assert_eq!(intersect(&a, &b), HashSet::from([2]));
        assert_eq!(
            difference(&HashSet::from([1, 2, 3]), &HashSet::from([2])),
            HashSet::from([1, 3])
        );
        assert_eq!(symmetric_difference(&a, &b), HashSet::from([1, 3]));
    }

    #[test]
    fn operands_are_untouched() {
        let a = HashSet::from([1, 2]).freeze();
        let b = BTreeSet::from([2, 3]);
        let _ = union(&a, &b);
        let _ = intersect(&a, &b);
        let _ = difference(&a, &b);
        let _ = symmetric_difference(&a, &b);

        assert_eq!(*a, HashSet::from([1, 2]));
        assert_eq!(b, BTreeSet::from([2, 3]));
    }

    #[test]
    fn into_variants_filter_existing_target() {
        let a = HashSet::from([1, 2, 3]);
        let b = HashSet::from([2, 3, 4]);

        let target = BTreeSet::from([3, 9]);
        assert_eq!(intersect_into(&a, &b, target), BTreeSet::from([2, 3]));

        let target = BTreeSet::from([4, 9]);
        assert_eq!(difference_into(&a, &b, target), BTreeSet::from([1, 9]));

        let target: SortedSet<_> = [0].into_iter().collect();
        let result = symmetric_difference_into(&a, &b, target);
        assert_eq!(result.as_slice(), [0, 1, 4]);

        let target = HashSet::from([7]);
        assert_eq!(union_into(&a, &b, target), HashSet::from([1, 2, 3, 4, 7]));
    }

    #[test]
    fn subset_fast_path_and_empty_sets() {
        let empty = HashSet::<i32>::new();
        let a = HashSet::from([1]);

        assert!(is_subset_of(&empty, &a));
        assert!(is_proper_subset_of(&empty, &a));
        assert!(is_subset_of(&empty, &empty));
        assert!(!is_proper_subset_of(&empty, &empty));
        assert!(!is_subset_of(&a, &empty));
    }
}
