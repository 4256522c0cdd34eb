use std::fmt::{self, Debug};

use itertools::{Itertools, Product};

use super::FiniteSet;

/// A lazy iterator over every pair `(a, b)` of two sets.
///
/// This `struct` is created by [`cartesian_product()`]. See its documentation
/// for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CartesianProduct<I, J>
where
    I: Iterator,
{
    inner: Product<I, J>,
}

impl<I, J> Iterator for CartesianProduct<I, J>
where
    I: Iterator,
    I::Item: Clone,
    J: Iterator + Clone,
{
    type Item = (I::Item, J::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, J> Debug for CartesianProduct<I, J>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartesianProduct").finish_non_exhaustive()
    }
}

/// Returns every pair `(a, b)` with `a` from `a_set` and `b` from `b_set`.
///
/// Pairs are produced on demand, never materialized up front: for each
/// element of `a_set` in its iteration order, the elements of `b_set` are
/// walked again from the start. The product has `a_set.len() * b_set.len()`
/// pairs and is empty if either set is. The returned iterator is single
/// pass; call this function again to walk the product again.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use collect_algebra::set;
///
/// let numbers = BTreeSet::from([1, 2]);
/// let letters = BTreeSet::from(["a"]);
///
/// let pairs: Vec<_> = set::cartesian_product(&numbers, &letters).collect();
/// assert_eq!(pairs, [(&1, &"a"), (&2, &"a")]);
/// ```
pub fn cartesian_product<'s, A, B, SA, SB>(
    a_set: &'s SA,
    b_set: &'s SB,
) -> CartesianProduct<SA::Iter<'s>, SB::Iter<'s>>
where
    A: 's,
    B: 's,
    SA: FiniteSet<A> + ?Sized,
    SB: FiniteSet<B> + ?Sized,
{
    CartesianProduct {
        inner: a_set.iter().cartesian_product(b_set.iter()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use crate::container::SortedSet;
    use crate::set::*;

    #[test]
    fn one_pair_per_combination() {
        let numbers = HashSet::from([1, 2]);
        let letters = HashSet::from(["a"]);

        let pairs: HashSet<_> = cartesian_product(&numbers, &letters).collect();
        assert_eq!(pairs, HashSet::from([(&1, &"a"), (&2, &"a")]));
    }

    #[test]
    fn outer_element_repeats_once_per_inner_element() {
        let outer: SortedSet<_> = ['x', 'y'].into_iter().collect();
        let inner = BTreeSet::from([1, 2, 3]);

        let pairs: Vec<_> = cartesian_product(&outer, &inner)
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(
            pairs,
            [('x', 1), ('x', 2), ('x', 3), ('y', 1), ('y', 2), ('y', 3)]
        );
    }

    #[test]
    fn empty_operand_gives_empty_product() {
        let empty = HashSet::<u8>::new();
        let full = HashSet::from([1_u8, 2]);

        assert_eq!(cartesian_product(&empty, &full).count(), 0);
        assert_eq!(cartesian_product(&full, &empty).count(), 0);
    }

    #[test]
    fn is_lazy() {
        let big: BTreeSet<u32> = (0..10_000).collect();

        let mut product = cartesian_product(&big, &big);
        assert_eq!(product.next(), Some((&0, &0)));
        assert_eq!(product.next(), Some((&0, &1)));
    }
}
