use std::cmp::Ordering;

/// Compares two elements, acting as an `Fn(&T, &T) -> Ordering`.
///
/// Sorted reducers and sorted containers require the order to be total and
/// consistent: the result of a sort must not depend on the order elements
/// were fed in, apart from which of several *equal* elements is kept.
///
/// Any closure with the matching signature is a comparator.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use collect_algebra::cmp::{Comparator, Natural};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert!(by_len.is_equal(&"ab", &"cd"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` and `b` are considered equal by this comparator.
    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }

    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }
}

/// The natural order of an [`Ord`] type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<F, T> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
    T: ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by the natural order of a key extracted from each.
///
/// The key function is called twice per comparison, so keep it cheap.
///
/// # Examples
///
/// ```
/// use collect_algebra::cmp::{ByKey, Comparator};
///
/// let by_abs = ByKey::new(|n: &i32| n.unsigned_abs());
/// assert!(by_abs.is_equal(&-3, &3));
/// assert!(by_abs.lt(&1, &-2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F> {
    key_fn: F,
}

impl<F> ByKey<F> {
    /// Creates a comparator ordering by `key_fn`.
    #[inline]
    pub const fn new(key_fn: F) -> Self {
        Self { key_fn }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key_fn)(a).cmp(&(self.key_fn)(b))
    }
}
